//! Agent-callable blockchain certification tools backed by the xProof API.
//!
//! The crate exposes four tools (`certify_content`, `certify_hash`,
//! `certify_batch`, `verify_proof`) over an MCP stdio server. Each tool call
//! becomes one authenticated HTTPS request; the JSON response is turned into
//! a readable summary plus structured data.

pub mod app;
pub mod constants;
pub mod errors;
pub mod managers;
pub mod mcp;
pub mod services;
pub mod utils;
