//! Whole-file reads for the copydoc and the HTML email.
//!
//! Both inputs are read in one go and must be UTF-8. There is no streaming
//! and no lossy decoding.

use std::fs;
use std::path::Path;

use crate::{CopycheckError, Result};

/// Reads a UTF-8 text file into memory.
///
/// # Errors
///
/// * [`CopycheckError::FileNotFound`] if the path does not exist
/// * [`CopycheckError::InvalidEncoding`] if the bytes are not valid UTF-8
/// * [`CopycheckError::ReadError`] for any other I/O failure
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CopycheckError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    String::from_utf8(bytes).map_err(|_| CopycheckError::InvalidEncoding(path.to_path_buf()))
}
