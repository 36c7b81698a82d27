//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Collection Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Collection '{name}' not found in: {path}")]
    CollectionNotFound { name: String, path: PathBuf },

    #[error("Collection '{name}' could not be parsed: {message}")]
    CollectionParse { name: String, message: String },

    #[error("Collection fetch failed: {message}")]
    Fetch { message: String },

    // ─────────────────────────────────────────────────────────────
    // Ordering / Detail Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown ordering control: {key}")]
    UnknownOrderKey { key: String },

    #[error("Item {index} is out of range (collection has {len} items)")]
    ItemOutOfRange { index: usize, len: usize },

    #[error("No item is open in the detail view")]
    NoItemOpen,

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn collection_not_found(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::CollectionNotFound {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn collection_parse(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CollectionParse {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    pub fn unknown_order_key(key: impl Into<String>) -> Self {
        Self::UnknownOrderKey { key: key.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::CollectionNotFound { .. }
                | Error::Fetch { .. }
                | Error::UnknownOrderKey { .. }
                | Error::ItemOutOfRange { .. }
                | Error::NoItemOpen
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unknown_order_key("colour");
        assert_eq!(err.to_string(), "Unknown ordering control: colour");

        let err = Error::ItemOutOfRange { index: 7, len: 3 };
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(!Error::fetch("timeout").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::fetch("timeout").is_recoverable());
        assert!(Error::collection_not_found("travel", "/tmp").is_recoverable());
        assert!(Error::unknown_order_key("colour").is_recoverable());
        assert!(Error::NoItemOpen.is_recoverable());
        assert!(!Error::config("bad").is_recoverable());
    }

    #[test]
    fn test_collection_not_found_mentions_path() {
        let err = Error::collection_not_found("travel", "/srv/gallery/collections");
        let msg = err.to_string();
        assert!(msg.contains("travel"));
        assert!(msg.contains("/srv/gallery/collections"));
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading collection").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
