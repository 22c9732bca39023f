//! Configuration management for cratecheck

mod settings;

// Re-export main types
pub use settings::{
    CONFIG_FILE_NAME, Config, DEFAULT_TIMEOUT_SECS, Settings, is_valid_channel,
};
