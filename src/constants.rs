pub mod service {
    pub const DEFAULT_BASE_URL: &str = "https://xproof.app";
    pub const USER_AGENT: &str = concat!("xproof/", env!("CARGO_PKG_VERSION"));
}

pub mod paths {
    pub const PROOF: &str = "/api/proof";
    pub const BATCH: &str = "/api/batch";
}

pub mod settings {
    pub const API_KEY: &str = "XPROOF_API_KEY";
    pub const BASE_URL: &str = "XPROOF_BASE_URL";
    pub const SETTINGS_FILE: &str = "XPROOF_SETTINGS_FILE";
}

pub mod limits {
    pub const MAX_BATCH_SIZE: usize = 50;
    pub const LOG_STRING_LENGTH: usize = 512;
    pub const SUGGESTION_LIMIT: usize = 3;
}

pub mod protocol {
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
    pub const SERVER_NAME: &str = "xproof";
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}
