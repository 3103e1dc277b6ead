//! Session-specific error types.

use std::path::PathBuf;

/// Errors that can occur while saving or restoring the navigation session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Failed to read the session file
    #[error("Failed to read session from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the session file
    #[error("Failed to write session to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the session
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    /// Failed to deserialize the session
    #[error("Failed to deserialize session from {path}: {message}")]
    DeserializationFailed { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let error = SessionError::SerializationFailed("boom".to_string());
        assert!(error.to_string().contains("boom"));

        let error = SessionError::DeserializationFailed {
            path: PathBuf::from("/tmp/session.yml"),
            message: "bad".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("/tmp/session.yml"));
        assert!(error_str.contains("bad"));
    }

    #[test]
    fn test_session_error_with_io_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = SessionError::WriteFailed {
            path: PathBuf::from("/locked/session.yml"),
            source: io_error,
        };
        assert!(error.to_string().contains("/locked/session.yml"));
        assert!(error.to_string().contains("denied"));
    }
}
