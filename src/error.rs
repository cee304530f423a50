/// Centralized error types for note-vault using thiserror
///
/// Mirrors the three failure families of the vault: configuration problems at
/// construction, pattern compilation, and filesystem errors during the walk.
use thiserror::Error;

/// Main error type for the note vault
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Traversal error: {0}")]
    Traversal(#[from] TraversalError),

    #[error("Not yet implemented: {0}")]
    Unimplemented(&'static str),
}

/// Errors related to configuration and vault construction
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not get file info for note directory '{path}': {source}")]
    RootNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the user home directory")]
    HomeDirUnavailable,

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Errors raised while compiling the note filename patterns.
///
/// The patterns are fixed, so this signals an internal invariant violation
/// rather than bad user input.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Could not compile regex for {kind} note: {pattern}")]
    CompileFailed {
        kind: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors surfaced by the directory walk
#[derive(Error, Debug)]
pub enum TraversalError {
    #[error("Failed to walk '{}': {source}", .path.as_deref().unwrap_or("<unknown>"))]
    WalkFailed {
        path: Option<String>,
        #[source]
        source: walkdir::Error,
    },
}

impl From<walkdir::Error> for TraversalError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_string_lossy().to_string());
        TraversalError::WalkFailed { path, source: err }
    }
}
