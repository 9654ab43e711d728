//! Library API integration tests
use copycheck_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_check_files_api() {
    let report =
        check_files(get_fixture_path("spring_sale.txt"), get_fixture_path("spring_sale.html")).expect("should compare");

    assert_eq!(report.summary.blocks_checked, 5);
    assert_eq!(report.discrepancies.len(), 1);
    assert_eq!(report.discrepancies[0].name, "Header");
    assert_eq!(report.discrepancies[0].found, "Welcome too our store!");
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing_block("Footer"), Some("All rights reserved"));
}

#[test]
fn test_clean_fixture() {
    let report = check_files(get_fixture_path("clean.txt"), get_fixture_path("clean.html")).expect("should compare");
    assert!(report.is_clean());
}

#[test]
fn test_copydoc_fixture_names() {
    let copydoc = Copydoc::from_file(get_fixture_path("spring_sale.txt")).unwrap();
    let names: Vec<&str> = copydoc.iter().map(|b| b.name.as_str()).collect();

    assert_eq!(names, vec!["Subject Line", "Header", "Hero", "CTA", "Footer"]);
    assert_eq!(copydoc.get("Hero"), Some("Save up to 30% on every planter this week."));
}

#[test]
fn test_extracted_units_fixture() {
    let units = extract_text_units_from_file(get_fixture_path("spring_sale.html")).unwrap();

    assert!(units.contains(&"Spring has sprung at Greenleaf!".to_string()));
    assert!(units.contains(&"Save up to 30% on every planter this week.".to_string()));
    assert!(units.contains(&"to unsubscribe.".to_string()));
}

#[test]
fn test_invalid_encoding_fixture() {
    let result = check_files(get_fixture_path("invalid_utf8.txt"), get_fixture_path("clean.html"));
    assert!(matches!(result, Err(CopycheckError::InvalidEncoding(_))));
}

#[test]
fn test_proofreader_legacy_snippets() {
    let config = CompareConfig::builder().snippet_alignment(SnippetAlignment::Legacy).build();
    let report = Proofreader::with_config(config)
        .check_files(get_fixture_path("spring_sale.txt"), get_fixture_path("spring_sale.html"))
        .unwrap();

    let snippet = &report.discrepancies[0].snippet;
    assert_eq!(snippet.expected, "Welcome to our stor");
    assert_eq!(snippet.found, "Welcome too our sto");
}

#[test]
fn test_report_output_formats() {
    let report = check_files(get_fixture_path("spring_sale.txt"), get_fixture_path("spring_sale.html")).unwrap();

    let text = render_text(&report, &TextConfig::default());
    assert!(text.contains("1 Text Discrepancies Found"));
    assert!(text.contains("Footer \"All rights reserved\""));

    let json = render_json(&report, &JsonConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["missing"], 1);
}

#[test]
fn test_high_threshold_turns_discrepancy_into_missing() {
    let config = CompareConfig::builder().threshold(99.0).build();
    let report = Proofreader::with_config(config)
        .check("Header\nWelcome to our store!", "<p>Welcome too our store!</p>")
        .unwrap();

    assert!(report.discrepancies.is_empty());
    assert_eq!(report.missing_block("Header"), Some("Welcome to our store!"));
}
