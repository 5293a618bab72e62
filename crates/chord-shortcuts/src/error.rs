//! Shortcut error types.

use thiserror::Error;

/// Errors raised while registering or releasing shortcuts.
///
/// All of these are configuration errors surfaced to the caller of the
/// registering API. Nothing here is retried internally.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// Key label is not in the key table.
    #[error("Unrecognized key: \"{0}\"")]
    UnrecognizedKey(String),

    /// Modifier name is not one of Ctrl, Alt, Shift, Meta.
    #[error("Unrecognized modifier: \"{0}\", expected one of \"Ctrl\", \"Alt\", \"Shift\", \"Meta\"")]
    UnrecognizedModifier(String),

    /// Target id did not resolve to an element.
    #[error("Could not locate target node with id \"{0}\"")]
    TargetNotFound(String),

    /// Target exposes neither standard nor legacy listener registration.
    #[error("Do not know how to attach or detach events on {0}")]
    UnsupportedPlatform(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML error.
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ShortcutError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e.to_string())
    }
}

/// Result type for shortcut operations.
pub type ShortcutResult<T> = Result<T, ShortcutError>;
