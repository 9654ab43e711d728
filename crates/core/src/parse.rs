//! HTML parsing and text node extraction.
//!
//! This module provides the [`Document`] type, a thin wrapper over a parsed
//! `scraper` tree, and the extraction of [`Document::text_units`]: the
//! normalized content of every text node in document order.
//!
//! # Example
//!
//! ```rust
//! use copycheck_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Spring Sale</h1>
//!             <p>Save   up to
//!                50% today</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let units = doc.text_units();
//! assert!(units.contains(&"Spring Sale".to_string()));
//! assert!(units.contains(&"Save   up to 50% today".to_string()));
//! ```

use std::path::Path;

use scraper::Html;

use crate::Result;
use crate::fetch::read_file;
use crate::normalize::flatten_text_node;

/// Represents a parsed HTML email.
///
/// # Example
///
/// ```rust
/// use copycheck_core::parse::Document;
///
/// let doc = Document::parse("<html><head><title>Promo</title></head><body><p>Hi</p></body></html>");
/// assert_eq!(doc.text_nodes().collect::<Vec<_>>(), ["Promo", "Hi"]);
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is error-recovering: malformed markup still yields a tree.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Reads and parses an HTML file.
    ///
    /// # Errors
    ///
    /// Propagates the file access and UTF-8 errors of [`read_file`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = read_file(path)?;
        Ok(Self::parse(&source))
    }

    /// Raw text of every text node, in document order.
    ///
    /// Only character data counts. Comments (including Outlook conditional
    /// comments) and the doctype are separate node kinds in the tree and are
    /// skipped, whereas a BeautifulSoup `find_all(text=True)` walk would
    /// return them too.
    pub fn text_nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| node.value().as_text().map(|text| &**text))
    }

    /// Normalized content of every text node, in document order.
    ///
    /// Each node is split into lines, every line stripped, the lines joined
    /// with single spaces and the result normalized. Whitespace-only nodes are
    /// kept as empty strings so positions stay one-to-one with the tree.
    pub fn text_units(&self) -> Vec<String> {
        self.text_nodes().map(flatten_text_node).collect()
    }
}

/// Extracts the normalized text units of an HTML string.
pub fn extract_text_units(html: &str) -> Vec<String> {
    let units = Document::parse(html).text_units();
    tracing::debug!(units = units.len(), "extracted text units");
    units
}

/// Extracts the normalized text units of an HTML file.
///
/// # Errors
///
/// Returns [`crate::CopycheckError::FileNotFound`] or
/// [`crate::CopycheckError::InvalidEncoding`] when the file cannot be used.
pub fn extract_text_units_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let source = read_file(path)?;
    Ok(extract_text_units(&source))
}
