//! Error kinds for nestdot operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    // =========================================================================
    // Encoding errors
    // =========================================================================
    /// The root value handed to the encoder is not a mapping or a supported
    /// container (scalars and ignored kinds are rejected at the root)
    InvalidInputKind,

    /// Input document could not be decoded into the value model
    InvalidFormat,

    // =========================================================================
    // Rendering errors
    // =========================================================================
    /// The external rendering executable could not be located
    RenderingToolMissing,

    /// The external rendering executable exited with a non-zero status
    RenderingFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File or directory not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::IoFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::InvalidInputKind.to_string(), "InvalidInputKind");
        assert_eq!(ErrorKind::RenderingFailed.to_string(), "RenderingFailed");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::IoFailed.is_retryable());
        assert!(!ErrorKind::InvalidInputKind.is_retryable());
        assert!(!ErrorKind::RenderingToolMissing.is_retryable());
        assert!(!ErrorKind::RenderingFailed.is_retryable());
    }
}
