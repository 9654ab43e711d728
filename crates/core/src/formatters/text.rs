use std::fmt::Write;

use crate::compare::ComparisonReport;

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "--------------------------------------------------";

/// Configuration for the human-readable report
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Prefix sections with emoji markers
    pub use_emoji: bool,

    /// Decimal places for similarity scores
    pub precision: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { use_emoji: true, precision: 2 }
    }
}

/// Plain text formatter for comparison reports
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Render a report as text
    pub fn render(&self, report: &ComparisonReport) -> String {
        render_text(report, &self.config)
    }
}

/// Render a comparison report for a human proofreader
pub fn render_text(report: &ComparisonReport, config: &TextConfig) -> String {
    let marker = |emoji: &'static str| if config.use_emoji { emoji } else { "" };
    let mut out = String::new();
    let total = report.discrepancies.len();

    let _ = writeln!(out, "\n{}SUMMARY REPORT: {} Text Discrepancies Found", marker("📌 "), total);
    let _ = writeln!(out, "{}", HEAVY_RULE);

    if report.discrepancies.is_empty() {
        let _ = writeln!(
            out,
            "{}No discrepancies found between the text blocks and the HTML email!",
            marker("✅ ")
        );
    }

    for (i, d) in report.discrepancies.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{}) SIMILARITY:   {:.prec$}%  IN  {}\n",
            i + 1,
            d.similarity,
            d.name,
            prec = config.precision
        );
        let _ = writeln!(out, "{}EXPECTED:      {}\n", marker("🟩 "), d.expected);
        let _ = writeln!(out, "{}FOUND:         {}\n", marker("🟥 "), d.found);
        let _ = writeln!(
            out,
            "{}DIFFERENCE:   Expected: \"{}\" Found: \"{}\"\n",
            marker("🟦 "),
            d.snippet.expected,
            d.snippet.found
        );
        let _ = writeln!(out, "{}", if i + 1 == total { HEAVY_RULE } else { LIGHT_RULE });
    }

    if report.missing.is_empty() {
        let _ = writeln!(
            out,
            "\n{}All text blocks from the copywriting team were identified at least once in the HTML email!\n",
            marker("✅ ")
        );
    } else {
        let _ = writeln!(
            out,
            "\n{}WARNING: The following text blocks from the copywriting team were not found in the HTML email:\n",
            marker("🟨 ")
        );
        for (i, m) in report.missing.iter().enumerate() {
            let _ = writeln!(out, "   {}) {} \"{}\"\n", i + 1, m.name, m.expected);
        }
    }

    out
}
