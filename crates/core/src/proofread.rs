//! Main proofreading API.
//!
//! [`Proofreader`] runs the whole pipeline: parse the copydoc, extract the
//! email's text units, compare them and return a [`ComparisonReport`].
//! The convenience functions [`check`] and [`check_files`] use the default
//! configuration.
//!
//! # Example
//!
//! ```rust
//! use copycheck_core::check;
//!
//! let copydoc = "Header\nWelcome to our store!\n\nFooter\nAll rights reserved";
//! let html = "<html><body><h1>Welcome too our store!</h1><a>Click here</a></body></html>";
//!
//! let report = check(copydoc, html)?;
//! assert_eq!(report.discrepancies.len(), 1);
//! assert_eq!(report.missing_block("Footer"), Some("All rights reserved"));
//! # Ok::<(), copycheck_core::CopycheckError>(())
//! ```

use std::path::Path;

use crate::Result;
use crate::compare::{CompareConfig, ComparisonReport, compare_blocks};
use crate::copydoc::Copydoc;
use crate::parse::{extract_text_units, extract_text_units_from_file};

/// Entry point for comparing approved copy against an HTML email.
///
/// # Example
///
/// ```rust
/// use copycheck_core::{CompareConfig, Proofreader};
///
/// let reader = Proofreader::with_config(CompareConfig::builder().threshold(80.0).build());
/// let report = reader.check("CTA\nShop now", "<p>Shop today</p>")?;
/// assert_eq!(report.missing.len(), 1);
/// # Ok::<(), copycheck_core::CopycheckError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Proofreader {
    config: CompareConfig,
}

impl Proofreader {
    /// Creates a proofreader with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compares copydoc text against HTML source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CopycheckError::InvalidConfig`] for an out-of-range threshold.
    pub fn check(&self, copydoc: &str, html: &str) -> Result<ComparisonReport> {
        self.config.validate()?;
        let copydoc = Copydoc::parse(copydoc);
        let units = extract_text_units(html);
        Ok(compare_blocks(&copydoc, &units, &self.config))
    }

    /// Compares a copydoc file against an HTML email file.
    ///
    /// Both files are read completely before any comparison happens, so a
    /// failure never yields a partial report.
    ///
    /// # Errors
    ///
    /// File access, UTF-8 decoding and configuration errors.
    pub fn check_files(&self, copydoc_path: impl AsRef<Path>, html_path: impl AsRef<Path>) -> Result<ComparisonReport> {
        self.config.validate()?;
        let copydoc = Copydoc::from_file(copydoc_path)?;
        let units = extract_text_units_from_file(html_path)?;
        Ok(compare_blocks(&copydoc, &units, &self.config))
    }
}

/// Compares copydoc text against HTML source with the default configuration.
pub fn check(copydoc: &str, html: &str) -> Result<ComparisonReport> {
    Proofreader::new().check(copydoc, html)
}

/// Compares a copydoc file against an HTML email file with the default configuration.
pub fn check_files(copydoc_path: impl AsRef<Path>, html_path: impl AsRef<Path>) -> Result<ComparisonReport> {
    Proofreader::new().check_files(copydoc_path, html_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CopycheckError;
    use std::io::Write;

    const COPYDOC: &str = "Header\nWelcome to our store!\n\nFooter\nAll rights reserved\n";
    const EMAIL: &str = r#"<html>
  <body>
    <h1>
      Welcome too our store!
    </h1>
    <a href="/shop">Click here</a>
  </body>
</html>"#;

    #[test]
    fn test_check_end_to_end() {
        let report = check(COPYDOC, EMAIL).unwrap();

        assert_eq!(report.discrepancies.len(), 1);
        assert_eq!(report.discrepancies[0].name, "Header");
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing_block("Footer"), Some("All rights reserved"));
    }

    #[test]
    fn test_check_rejects_bad_threshold() {
        let reader = Proofreader::with_config(CompareConfig::builder().threshold(101.0).build());
        assert!(matches!(reader.check(COPYDOC, EMAIL), Err(CopycheckError::InvalidConfig(_))));
    }

    #[test]
    fn test_check_files() {
        let mut copydoc = tempfile::NamedTempFile::new().unwrap();
        copydoc.write_all(COPYDOC.as_bytes()).unwrap();
        let mut email = tempfile::NamedTempFile::new().unwrap();
        email.write_all(EMAIL.as_bytes()).unwrap();

        let report = check_files(copydoc.path(), email.path()).unwrap();
        assert_eq!(report, check(COPYDOC, EMAIL).unwrap());
    }

    #[test]
    fn test_check_files_missing_input() {
        let mut copydoc = tempfile::NamedTempFile::new().unwrap();
        copydoc.write_all(COPYDOC.as_bytes()).unwrap();

        let result = check_files(copydoc.path(), "/nonexistent/email.html");
        assert!(matches!(result, Err(CopycheckError::FileNotFound(_))));
    }
}
