pub mod compare;
pub mod copydoc;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod matcher;
pub mod normalize;
pub mod parse;
pub mod proofread;
pub mod snippet;

pub use compare::{
    CompareConfig, CompareConfigBuilder, ComparisonReport, Discrepancy, MissingBlock, Summary, compare_blocks,
};
pub use copydoc::{Copydoc, TextBlock};
pub use error::{CopycheckError, Result};
pub use fetch::read_file;
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, render_json, render_text};
#[doc(hidden)]
pub use matcher::{Match, OpTag, Opcode, SequenceMatcher};
pub use matcher::similarity_percent;
pub use normalize::normalize_text;
pub use parse::{Document, extract_text_units, extract_text_units_from_file};
pub use proofread::{Proofreader, check, check_files};
pub use snippet::{DifferenceSnippet, SnippetAlignment, find_difference_snippet};
