use crate::Result;
use crate::compare::ComparisonReport;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// JSON formatter for comparison reports
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Render a report as JSON
    pub fn render(&self, report: &ComparisonReport) -> Result<String> {
        render_json(report, &self.config)
    }
}

/// Convert a comparison report to JSON
pub fn render_json(report: &ComparisonReport, config: &JsonConfig) -> Result<String> {
    let json = if config.pretty { serde_json::to_string_pretty(report)? } else { serde_json::to_string(report)? };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompareConfig, Copydoc, compare_blocks};

    fn sample_report() -> ComparisonReport {
        let copydoc = Copydoc::parse("Header\nWelcome to our store!\n\nFooter\nAll rights reserved");
        let units = vec!["Welcome too our store!".to_string(), "Click here".to_string()];
        compare_blocks(&copydoc, &units, &CompareConfig::default())
    }

    #[test]
    fn test_render_json_structure() {
        let json = render_json(&sample_report(), &JsonConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["blocks_checked"], 2);
        assert_eq!(value["summary"]["discrepancies"], 1);
        assert_eq!(value["summary"]["missing"], 1);
        assert_eq!(value["discrepancies"][0]["name"], "Header");
        assert_eq!(value["discrepancies"][0]["found"], "Welcome too our store!");
        assert_eq!(value["discrepancies"][0]["snippet"]["expected"], "Welcome to our stor");
        assert_eq!(value["missing"][0]["name"], "Footer");
        assert_eq!(value["missing"][0]["expected"], "All rights reserved");
        assert!(value["duplicates"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_json_pretty() {
        let formatter = JsonFormatter::new(JsonConfig { pretty: true });
        let json = formatter.render(&sample_report()).unwrap();

        assert!(json.starts_with("{\n"));
        assert!(json.contains("  \"summary\""));
    }

    #[test]
    fn test_render_json_compact() {
        let json = render_json(&sample_report(), &JsonConfig { pretty: false }).unwrap();
        assert!(!json.contains('\n'));
    }
}
