//! Error types for copycheck operations.
//!
//! This module defines the main error type [`CopycheckError`] which represents
//! every failure the proofreading pipeline can surface: reading the copydoc or
//! the HTML email, decoding it, rendering a report, or rejecting a config.
//!
//! Malformed copydoc structure is never an error. A block without a body
//! simply yields an empty body string.
//!
//! # Example
//!
//! ```rust
//! use copycheck_core::{CopycheckError, Result};
//!
//! fn require_html(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(CopycheckError::InvalidConfig("empty HTML".to_string()));
//!     }
//!     Ok(html)
//! }
//! # assert!(require_html("").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for copycheck operations.
///
/// # Example
///
/// ```rust
/// use copycheck_core::{CopycheckError, check_files};
///
/// match check_files("missing.txt", "missing.html") {
///     Ok(report) => println!("{} discrepancies", report.discrepancies.len()),
///     Err(CopycheckError::FileNotFound(path)) => println!("no such file: {}", path.display()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum CopycheckError {
    /// File not found.
    ///
    /// Returned when the copydoc or HTML email path does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid character encoding.
    ///
    /// Both inputs must be UTF-8; anything else is rejected rather than
    /// decoded lossily.
    #[error("Invalid character encoding in {0} (expected UTF-8)")]
    InvalidEncoding(PathBuf),

    /// Other file I/O errors (permissions, directories, ...).
    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Report serialization errors.
    #[error("Failed to serialize report: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Rejected comparison configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for CopycheckError.
pub type Result<T> = std::result::Result<T, CopycheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CopycheckError::FileNotFound(PathBuf::from("copy.txt"));
        assert!(err.to_string().contains("File not found"));
        assert!(err.to_string().contains("copy.txt"));
    }

    #[test]
    fn test_invalid_encoding_error() {
        let err = CopycheckError::InvalidEncoding(PathBuf::from("email.html"));
        assert!(err.to_string().contains("UTF-8"));
        assert!(err.to_string().contains("email.html"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CopycheckError = io.into();
        assert!(matches!(err, CopycheckError::ReadError(_)));
    }
}
