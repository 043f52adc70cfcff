pub mod aliases;
pub mod catalog;
pub mod envelope;
pub mod protocol;
pub mod server;
