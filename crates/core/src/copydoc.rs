//! Copydoc parsing.
//!
//! A copydoc is the approved copy for an email, written as blocks separated
//! by a blank line. The first line of a block names it; the remaining lines
//! are its body.
//!
//! ```text
//! Header
//! Welcome to our store!
//!
//! Footer
//! All rights reserved
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::Result;
use crate::fetch::read_file;

/// A named unit of expected text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub name: String,
    pub body: String,
}

/// Ordered name → body mapping parsed from a copydoc.
///
/// Names are unique. A repeated name overwrites the earlier body but keeps
/// the position of its first occurrence; every repeated name is remembered
/// in [`Copydoc::duplicates`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Copydoc {
    blocks: Vec<TextBlock>,
    index: HashMap<String, usize>,
    duplicates: Vec<String>,
}

impl Copydoc {
    /// Parses copydoc text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use copycheck_core::Copydoc;
    ///
    /// let doc = Copydoc::parse("Header\nWelcome to\n  our store!\n\nFooter\nAll rights reserved\n");
    /// assert_eq!(doc.get("Header"), Some("Welcome to our store!"));
    /// assert_eq!(doc.get("Footer"), Some("All rights reserved"));
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut doc = Self::default();

        for paragraph in text.split("\n\n") {
            if paragraph.trim().is_empty() {
                continue;
            }

            let mut lines = paragraph.split('\n');
            let name = lines.next().unwrap_or_default().replace('\\', "").trim().to_string();
            let body = lines.map(str::trim).collect::<Vec<_>>().join(" ").trim().to_string();

            if name.is_empty() {
                tracing::warn!(body = %body, "copydoc block has an empty name line");
            }

            doc.insert(name, body);
        }

        tracing::debug!(blocks = doc.len(), duplicates = doc.duplicates.len(), "parsed copydoc");
        doc
    }

    /// Reads and parses a copydoc file.
    ///
    /// # Errors
    ///
    /// Propagates the file access and UTF-8 errors of [`read_file`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = read_file(path)?;
        Ok(Self::parse(&text))
    }

    /// Inserts a block, overwriting any earlier body under the same name.
    pub fn insert(&mut self, name: String, body: String) {
        match self.index.get(&name) {
            Some(&pos) => {
                tracing::warn!(block = %name, "duplicate copydoc block name, keeping the later body");
                self.duplicates.push(name);
                self.blocks[pos].body = body;
            }
            None => {
                self.index.insert(name.clone(), self.blocks.len());
                self.blocks.push(TextBlock { name, body });
            }
        }
    }

    /// Body of the block with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&pos| self.blocks[pos].body.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Names that appeared more than once, in the order they were repeated.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

impl<'a> IntoIterator for &'a Copydoc {
    type Item = &'a TextBlock;
    type IntoIter = std::slice::Iter<'a, TextBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<String>, B: Into<String>> FromIterator<(N, B)> for Copydoc {
    fn from_iter<I: IntoIterator<Item = (N, B)>>(iter: I) -> Self {
        let mut doc = Self::default();
        for (name, body) in iter {
            doc.insert(name.into(), body.into());
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(doc: &Copydoc) -> Vec<(&str, &str)> {
        doc.iter().map(|b| (b.name.as_str(), b.body.as_str())).collect()
    }

    #[test]
    fn test_parse_blocks_in_order() {
        let doc = Copydoc::parse("Header\nWelcome!\n\nBody\nLine one\nLine two\n\nFooter\nBye");

        assert_eq!(
            pairs(&doc),
            vec![("Header", "Welcome!"), ("Body", "Line one Line two"), ("Footer", "Bye")]
        );
    }

    #[test]
    fn test_name_strips_backslashes_and_whitespace() {
        let doc = Copydoc::parse("  \\Hero\\ Title \\  \nBig news");
        assert_eq!(doc.get("Hero Title"), Some("Big news"));
    }

    #[test]
    fn test_single_line_block_has_empty_body() {
        let doc = Copydoc::parse("Lonely\n\nOther\ntext");
        assert_eq!(doc.get("Lonely"), Some(""));
        assert_eq!(doc.get("Other"), Some("text"));
    }

    #[test]
    fn test_body_lines_are_trimmed_and_joined() {
        let doc = Copydoc::parse("Promo\n   Save 20%   \n\ton everything  ");
        assert_eq!(doc.get("Promo"), Some("Save 20% on everything"));
    }

    #[test]
    fn test_inner_whitespace_only_line_keeps_double_space() {
        let doc = Copydoc::parse("Promo\nfirst\n   \nsecond");
        assert_eq!(doc.get("Promo"), Some("first  second"));
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let doc = Copydoc::parse("CTA\nShop now\n\nFooter\nBye\n\nCTA\nBuy today");

        assert_eq!(doc.len(), 2);
        assert_eq!(pairs(&doc), vec![("CTA", "Buy today"), ("Footer", "Bye")]);
        assert_eq!(doc.duplicates(), ["CTA".to_string()]);
    }

    #[test]
    fn test_two_blank_lines_between_blocks() {
        let doc = Copydoc::parse("Header\nHi\n\n\n\nFooter\nBye");
        assert_eq!(pairs(&doc), vec![("Header", "Hi"), ("Footer", "Bye")]);
    }

    #[test]
    fn test_odd_newline_run_leaves_empty_name() {
        let doc = Copydoc::parse("A\nx\n\n\nB\ny");
        assert_eq!(pairs(&doc), vec![("A", "x"), ("", "B y")]);

        let doc = Copydoc::parse("Header\nWelcome to our store!\n\n\nFooter\nAll rights reserved\n");
        assert_eq!(doc.get("Header"), Some("Welcome to our store!"));
        assert_eq!(doc.get(""), Some("Footer All rights reserved"));
        assert_eq!(doc.get("Footer"), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = Copydoc::parse("Header\r\nWelcome\r\n\r\nFooter\r\nBye\r\n");
        assert_eq!(pairs(&doc), vec![("Header", "Welcome"), ("Footer", "Bye")]);
    }

    #[test]
    fn test_blank_paragraphs_are_skipped() {
        let doc = Copydoc::parse("\n\nHeader\nHi\n\n\n\n");
        assert_eq!(pairs(&doc), vec![("Header", "Hi")]);
        assert!(Copydoc::parse("").is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let expected: Copydoc = [("Header", "Welcome to our store!"), ("Offer", "20% off"), ("Footer", "")]
            .into_iter()
            .collect();

        let serialized: String = expected.iter().map(|b| format!("{}\n{}\n\n", b.name, b.body)).collect();

        assert_eq!(Copydoc::parse(&serialized), expected);
    }
}
