//! Error types for folio_components

use thiserror::Error;

/// Errors from configuration loading and animation-name parsing
///
/// Component derivation itself never fails.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Animation name not in the component's preset table
    #[error("unknown {kind} animation `{name}`")]
    UnknownAnimation { kind: &'static str, name: String },

    /// Failed to read a configuration file
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for `MotionDefaults`
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for folio_components operations
pub type Result<T> = std::result::Result<T, FolioError>;
