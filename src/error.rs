//! Error types for the configuration layer.
//!
//! The climate controller and the frame sniffer are infallible at runtime:
//! bad inputs are clamped or defaulted where they are detected.  The only
//! fallible surface is turning host-supplied configuration into the typed
//! config structs, which funnels into [`ConfigError`].

use core::fmt;

/// Errors from parsing or validating component configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration document could not be deserialized.
    Parse,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "config could not be parsed"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}

/// Config-layer `Result` alias.
pub type Result<T> = core::result::Result<T, ConfigError>;
