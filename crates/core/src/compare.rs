//! Block comparison.
//!
//! Every expected copydoc block is scored against every text unit of the
//! email. A perfect score marks the block as found. A score between the
//! threshold and 100 marks it as found *and* records a discrepancy to review.
//! A block with no unit reaching the threshold is missing.
//!
//! Scanning never stops early: a block that matches one unit exactly still
//! collects discrepancies from near-duplicate units elsewhere in the email
//! (headers and footers are often repeated with small variations).

use serde::Serialize;

use crate::copydoc::Copydoc;
use crate::matcher::similarity_percent;
use crate::snippet::{DEFAULT_CONTEXT, DifferenceSnippet, SnippetAlignment, find_difference_snippet};
use crate::{CopycheckError, Result};

/// Configuration for block comparison.
///
/// # Example
///
/// ```rust
/// use copycheck_core::{CompareConfig, SnippetAlignment};
///
/// let config = CompareConfig::builder()
///     .threshold(60.0)
///     .context(15)
///     .snippet_alignment(SnippetAlignment::Legacy)
///     .build();
/// assert_eq!(config.threshold, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    /// Minimum similarity, in percent, for a unit to count as a match (default: 50.0).
    pub threshold: f64,

    /// Characters of context on each side of a difference (default: 10).
    pub context: usize,

    /// How difference snippets are cut (default: aligned).
    pub snippet_alignment: SnippetAlignment,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self { threshold: 50.0, context: DEFAULT_CONTEXT, snippet_alignment: SnippetAlignment::default() }
    }
}

impl CompareConfig {
    /// Creates a new builder for CompareConfig.
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::new()
    }

    /// Checks that the threshold is a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`CopycheckError::InvalidConfig`] when the threshold is outside `[0, 100]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(CopycheckError::InvalidConfig(format!(
                "threshold must be between 0 and 100, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Builder for CompareConfig.
pub struct CompareConfigBuilder {
    config: CompareConfig,
}

impl CompareConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: CompareConfig::default() }
    }

    /// Sets the match threshold in percent.
    pub fn threshold(mut self, value: f64) -> Self {
        self.config.threshold = value;
        self
    }

    /// Sets the snippet context radius.
    pub fn context(mut self, value: usize) -> Self {
        self.config.context = value;
        self
    }

    /// Sets how snippets are aligned.
    pub fn snippet_alignment(mut self, value: SnippetAlignment) -> Self {
        self.config.snippet_alignment = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> CompareConfig {
        self.config
    }
}

impl Default for CompareConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An expected block paired with a partially matching email unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discrepancy {
    /// Copydoc block name.
    pub name: String,
    /// Approved text.
    pub expected: String,
    /// Text found in the email.
    pub found: String,
    /// Similarity in percent, below 100.
    pub similarity: f64,
    /// Context around the first difference.
    pub snippet: DifferenceSnippet,
}

/// An expected block with no sufficiently similar unit in the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingBlock {
    pub name: String,
    pub expected: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub blocks_checked: usize,
    pub units_scanned: usize,
    pub discrepancies: usize,
    pub missing: usize,
}

/// Result of comparing a copydoc against an email.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub summary: Summary,
    pub discrepancies: Vec<Discrepancy>,
    pub missing: Vec<MissingBlock>,
    /// Copydoc block names that were defined more than once.
    pub duplicates: Vec<String>,
}

impl ComparisonReport {
    /// True when nothing needs review.
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty() && self.missing.is_empty()
    }

    /// Expected text of a missing block, by name.
    pub fn missing_block(&self, name: &str) -> Option<&str> {
        self.missing
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.expected.as_str())
    }
}

/// Compares every copydoc block against the extracted email units.
///
/// # Example
///
/// ```rust
/// use copycheck_core::{CompareConfig, Copydoc, compare_blocks};
///
/// let copydoc = Copydoc::parse("Header\nWelcome to our store!\n\nFooter\nAll rights reserved");
/// let units = vec!["Welcome too our store!".to_string(), "Click here".to_string()];
///
/// let report = compare_blocks(&copydoc, &units, &CompareConfig::default());
/// assert_eq!(report.discrepancies.len(), 1);
/// assert_eq!(report.missing_block("Footer"), Some("All rights reserved"));
/// ```
pub fn compare_blocks(copydoc: &Copydoc, units: &[String], config: &CompareConfig) -> ComparisonReport {
    let mut discrepancies = Vec::new();
    let mut missing = Vec::new();

    for block in copydoc {
        let mut found = false;

        for unit in units {
            let similarity = similarity_percent(&block.body, unit);
            tracing::trace!(block = %block.name, similarity, unit = %unit, "scored unit");

            if similarity == 100.0 {
                found = true;
            } else if similarity >= config.threshold {
                found = true;
                discrepancies.push(Discrepancy {
                    name: block.name.clone(),
                    expected: block.body.clone(),
                    found: unit.clone(),
                    similarity,
                    snippet: find_difference_snippet(&block.body, unit, config.context, config.snippet_alignment),
                });
            }
        }

        if !found {
            tracing::debug!(block = %block.name, "no unit reached the threshold");
            missing.push(MissingBlock { name: block.name.clone(), expected: block.body.clone() });
        }
    }

    tracing::debug!(
        blocks = copydoc.len(),
        units = units.len(),
        discrepancies = discrepancies.len(),
        missing = missing.len(),
        "comparison finished"
    );

    ComparisonReport {
        summary: Summary {
            blocks_checked: copydoc.len(),
            units_scanned: units.len(),
            discrepancies: discrepancies.len(),
            missing: missing.len(),
        },
        discrepancies,
        missing,
        duplicates: copydoc.duplicates().to_vec(),
    }
}
