//! Locating the first difference between two strings.

use serde::{Deserialize, Serialize};

use crate::matcher::{OpTag, SequenceMatcher};

/// Default number of characters kept on each side of a difference.
pub const DEFAULT_CONTEXT: usize = 10;

/// How the `found` window is positioned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetAlignment {
    /// Each string is cut around its own side of the first edit.
    #[default]
    Aligned,
    /// Both strings are cut with the expected string's indices, so the
    /// `found` window drifts after insertions or deletions.
    Legacy,
}

/// Context windows around the first divergence of two strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DifferenceSnippet {
    pub expected: String,
    pub found: String,
}

impl DifferenceSnippet {
    pub fn is_empty(&self) -> bool {
        self.expected.is_empty() && self.found.is_empty()
    }
}

/// Cuts a window of `context` characters around the first edit between
/// `expected` and `found`.
///
/// Returns two empty strings when the inputs are equal.
///
/// # Example
///
/// ```rust
/// use copycheck_core::{SnippetAlignment, find_difference_snippet};
///
/// let snippet = find_difference_snippet(
///     "Order by Friday for free shipping",
///     "Order by Monday for free shipping",
///     5,
///     SnippetAlignment::Aligned,
/// );
/// assert_eq!(snippet.expected, "r by Friday f");
/// assert_eq!(snippet.found, "r by Monday f");
/// ```
pub fn find_difference_snippet(
    expected: &str, found: &str, context: usize, alignment: SnippetAlignment,
) -> DifferenceSnippet {
    let matcher = SequenceMatcher::new(expected, found);
    let Some(op) = matcher.opcodes().into_iter().find(|op| op.tag != OpTag::Equal) else {
        return DifferenceSnippet::default();
    };

    let (a, b) = (matcher.a(), matcher.b());
    let (lo, hi) = (op.a_start.saturating_sub(context), (op.a_end + context).min(a.len()));

    let found_window = match alignment {
        SnippetAlignment::Aligned => clamped_slice(b, op.b_start.saturating_sub(context), op.b_end + context),
        SnippetAlignment::Legacy => clamped_slice(b, lo, hi),
    };

    DifferenceSnippet { expected: clamped_slice(a, lo, hi), found: found_window }
}

fn clamped_slice(chars: &[char], lo: usize, hi: usize) -> String {
    let hi = hi.min(chars.len());
    let lo = lo.min(hi);
    chars[lo..hi].iter().collect()
}
