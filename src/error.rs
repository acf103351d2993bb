//! Crate-wide error type.
//!
//! None of these are fatal to the app: the UI layer logs them and falls
//! back to defaults (empty ring, default app list, unchanged login item).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by persistence, discovery and launching.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pinned apps JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine the user application data directory")]
    NoDataDirectory,

    #[error("cannot launch {path}: {reason}")]
    Launch { path: PathBuf, reason: String },

    #[error("login item update failed: {0}")]
    LoginItem(String),
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = Error::io(
            "/tmp/pinned_apps.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/pinned_apps.json"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn json_error_converts_with_question_mark() {
        fn parse() -> Result<Vec<u32>> {
            Ok(serde_json::from_str("not json")?)
        }
        assert!(matches!(parse(), Err(Error::Json(_))));
    }
}
