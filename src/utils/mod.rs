pub mod redact;
pub mod suggest;
pub mod summary;
pub mod text;
