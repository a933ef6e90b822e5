//! End-to-end scanner behavior against the embedded feature dataset.
//!
//! These tests run the full pipeline (extract, resolve, decorate) over
//! realistic source lines and verify:
//! - Exact finding locations (line, byte span within the line)
//! - Resolution through both raw dataset ids and the curated name table
//! - Per-category inclusion rules (length, function, tag, global)
//! - Suggestion text (px-to-rem conversions, reference browser fallbacks)

use baseline_data::FeatureRegistry;
use baseline_scanner::{FindingStatus, ScanOptions, Scanner, Span, TextDocument};
use pretty_assertions::assert_eq;
use std::time::Duration;

/// Loads the embedded dataset once per test.
fn registry() -> FeatureRegistry {
    FeatureRegistry::load().expect("embedded dataset should load")
}

// ============================================================================
// REPORT SHAPE
// ============================================================================

#[test]
fn test_clean_document_yields_empty_report() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let doc = TextDocument::new("/* reset */\n\nbody {\n  color: red;\n}\n");
    let report = scanner.scan_document(&doc);

    assert!(report.is_empty());
    assert_eq!(report.line_count(), 0);
}

#[test]
fn test_report_maps_lines_to_ordered_findings() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let doc = TextDocument::new(".hero {\n  margin: 16px 24px;\n  padding: 8px;\n}");
    let report = scanner.scan_document(&doc);

    assert_eq!(report.line_count(), 2);
    assert_eq!(report.finding_count(), 3);
    assert!(report.line(0).is_none());
    assert!(report.line(3).is_none());

    let margin = report.line(1).expect("margin line has findings");
    assert_eq!(margin.len(), 2);
    assert_eq!(margin[0].span, Span::new(10u32, 14u32));
    assert_eq!(margin[0].suggestion.as_deref(), Some("16px → 1rem"));
    assert_eq!(margin[1].span, Span::new(15u32, 19u32));
    assert_eq!(margin[1].suggestion.as_deref(), Some("24px → 1.5rem"));

    let padding = report.line(2).expect("padding line has findings");
    assert_eq!(padding.len(), 1);
    assert_eq!(padding[0].line, 2);
    assert_eq!(padding[0].span, Span::new(11u32, 14u32));
    assert_eq!(padding[0].suggestion.as_deref(), Some("8px → 0.5rem"));
}

#[test]
fn test_repeated_scans_are_identical() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let doc = TextDocument::new("const res = await fetch(url);\nmargin: 16px;\n<dialog>");
    let first = scanner.scan_document(&doc);
    let second = scanner.scan_document(&doc);

    assert_eq!(first, second);
}

// ============================================================================
// PX LENGTHS
// ============================================================================

#[test]
fn test_margin_line_yields_single_px_finding() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("margin: 16px;"));
    let findings = report.line(0).expect("line 0 has findings");

    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    assert_eq!(finding.line, 0);
    assert_eq!(finding.span, Span::new(8u32, 12u32));
    assert_eq!(finding.feature_id.as_deref(), Some("px"));
    assert_eq!(finding.status, FindingStatus::NotFound);
    assert_eq!(finding.suggestion.as_deref(), Some("16px → 1rem"));
}

#[test]
fn test_px_findings_carry_dataset_decoration() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("padding: 32px;"));
    let finding = &report.line(0).expect("line 0 has findings")[0];

    // Browser support and the spec link come from the dataset's px entry,
    // while the status stays not-found.
    assert_eq!(finding.status, FindingStatus::NotFound);
    assert_eq!(finding.support.get("safari"), Some(&true));
    assert!(finding
        .spec_url
        .as_deref()
        .is_some_and(|url| url.contains("css-values-4")));
    assert_eq!(finding.suggestion.as_deref(), Some("32px → 2rem"));
}

#[test]
fn test_px_suggestion_rounds_to_four_decimals() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("width: 1.25px;"));
    let finding = &report.line(0).expect("line 0 has findings")[0];

    assert_eq!(finding.suggestion.as_deref(), Some("1.25px → 0.0781rem"));
}

#[test]
fn test_rem_base_is_configurable() {
    let registry = registry();
    let options = ScanOptions {
        rem_base: 10.0,
        ..ScanOptions::default()
    };
    let scanner = Scanner::with_options(&registry, options);

    let report = scanner.scan_document(&TextDocument::new("font-size: 15px;"));
    let finding = &report.line(0).expect("line 0 has findings")[0];

    assert_eq!(finding.suggestion.as_deref(), Some("15px → 1.5rem"));
}

// ============================================================================
// TAG NAMES
// ============================================================================

#[test]
fn test_dialog_tag_resolves_through_curated_mapping() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("<dialog open>"));
    let findings = report.line(0).expect("line 0 has findings");

    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    // The tag span covers the opening angle bracket.
    assert_eq!(finding.span, Span::new(0u32, 7u32));
    assert_eq!(finding.feature_id.as_deref(), Some("html-elements.dialog"));
    assert_eq!(finding.status, FindingStatus::Widely);
    assert_eq!(finding.suggestion, None);
}

#[test]
fn test_tag_resolution_folds_case() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("<Picture>"));
    let finding = &report.line(0).expect("line 0 has findings")[0];

    assert_eq!(finding.feature_id.as_deref(), Some("html-elements.picture"));
    assert_eq!(finding.status, FindingStatus::Widely);
}

#[test]
fn test_unlisted_tag_is_absent() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("<blink>nope</blink>"));

    assert!(report.is_empty());
}

// ============================================================================
// FUNCTION CALLS
// ============================================================================

#[test]
fn test_function_calls_resolve_left_to_right() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let line = "filter: blur(2px); background: linear-gradient(red, blue);";
    let report = scanner.scan_document(&TextDocument::new(line));
    let findings = report.line(0).expect("line 0 has findings");

    // blur is not in the dataset and drops out; the px length sorts first.
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].feature_id.as_deref(), Some("px"));
    assert_eq!(findings[0].span, Span::new(13u32, 16u32));
    assert_eq!(findings[0].suggestion.as_deref(), Some("2px → 0.125rem"));
    assert_eq!(findings[1].feature_id.as_deref(), Some("linear-gradient"));
    assert_eq!(findings[1].span, Span::new(31u32, 46u32));
    assert_eq!(findings[1].status, FindingStatus::Widely);
    assert_eq!(findings[1].suggestion.as_deref(), Some("OK"));
}

#[test]
fn test_overlapping_categories_report_independently() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let line = "grid-template-columns: minmax(4px, auto);";
    let report = scanner.scan_document(&TextDocument::new(line));
    let findings = report.line(0).expect("line 0 has findings");

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].feature_id.as_deref(), Some("px"));
    assert_eq!(findings[0].span, Span::new(30u32, 33u32));
    assert_eq!(findings[1].feature_id.as_deref(), Some("minmax"));
    assert_eq!(findings[1].span, Span::new(23u32, 29u32));
}

#[test]
fn test_image_set_gets_safari_fallback_suggestion() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let line = "background-image: image-set(\"a.png\" 1x);";
    let report = scanner.scan_document(&TextDocument::new(line));
    let findings = report.line(0).expect("line 0 has findings");

    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    assert_eq!(
        finding.feature_id.as_deref(),
        Some("css-functions.image-set")
    );
    assert_eq!(finding.status, FindingStatus::Newly);
    assert_eq!(
        finding.suggestion.as_deref(),
        Some("Fallback for safari: e.g., -webkit-image-set or alternative")
    );
}

#[test]
fn test_reference_browser_is_configurable() {
    let registry = registry();
    let options = ScanOptions {
        reference_browser: "firefox".into(),
        ..ScanOptions::default()
    };
    let scanner = Scanner::with_options(&registry, options);

    let report = scanner.scan_document(&TextDocument::new("const p = new URLPattern({});"));
    let findings = report.line(0).expect("line 0 has findings");

    // URLPattern reports twice, once per category; only the call carries
    // a suggestion.
    assert_eq!(findings.len(), 2);
    assert_eq!(
        findings[0].suggestion.as_deref(),
        Some("Fallback for firefox: e.g., -webkit-URLPattern or alternative")
    );
    assert_eq!(findings[0].status, FindingStatus::Limited);
    assert_eq!(findings[1].suggestion, None);
}

// ============================================================================
// GLOBAL IDENTIFIERS
// ============================================================================

#[test]
fn test_fetch_call_reports_function_and_global() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("const res = await fetch(url);"));
    let findings = report.line(0).expect("line 0 has findings");

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].feature_id.as_deref(), Some("fetch"));
    assert_eq!(findings[0].span, Span::new(18u32, 23u32));
    assert_eq!(findings[0].suggestion.as_deref(), Some("OK"));
    assert_eq!(findings[1].feature_id.as_deref(), Some("fetch"));
    assert_eq!(findings[1].span, Span::new(18u32, 23u32));
    assert_eq!(findings[1].suggestion, None);
}

#[test]
fn test_repeated_calls_yield_repeated_findings() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("res = fetch(a) || fetch(b);"));
    let findings = report.line(0).expect("line 0 has findings");

    // Two call findings then two global findings, left to right.
    assert_eq!(findings.len(), 4);
    let spans: Vec<Span> = findings.iter().map(|f| f.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(6u32, 11u32),
            Span::new(18u32, 23u32),
            Span::new(6u32, 11u32),
            Span::new(18u32, 23u32),
        ]
    );
    assert!(findings
        .iter()
        .all(|f| f.feature_id.as_deref() == Some("fetch")));
}

#[test]
fn test_abort_controller_resolves_through_curated_mapping() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let report = scanner.scan_document(&TextDocument::new("const ctl = new AbortController();"));
    let findings = report.line(0).expect("line 0 has findings");

    // The call token has no dataset entry under its own name, so only the
    // global identifier reports, through the curated table.
    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    assert_eq!(finding.span, Span::new(16u32, 31u32));
    assert_eq!(finding.feature_id.as_deref(), Some("api.AbortController"));
    assert_eq!(finding.status, FindingStatus::Widely);
    assert_eq!(finding.suggestion, None);
}

#[test]
fn test_unknown_status_global_drops_but_function_reports() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let line = "const sab = new SharedArrayBuffer(1024);";
    let report = scanner.scan_document(&TextDocument::new(line));
    let findings = report.line(0).expect("line 0 has findings");

    // SharedArrayBuffer has a dataset entry without a baseline status, which
    // passes the call rule (record required) but fails the global rule
    // (known status required).
    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    assert_eq!(finding.span, Span::new(16u32, 33u32));
    assert_eq!(finding.feature_id.as_deref(), Some("SharedArrayBuffer"));
    assert_eq!(finding.status, FindingStatus::Unknown);
}

// ============================================================================
// PACED SCANNING
// ============================================================================

#[tokio::test]
async fn test_paced_scan_matches_plain_scan() {
    let registry = registry();
    let scanner = Scanner::new(&registry);

    let doc = TextDocument::new(".hero {\n  margin: 16px 24px;\n  padding: 8px;\n}");
    let plain = scanner.scan_document(&doc);

    let paced = scanner
        .scan_document_paced(&doc, Duration::from_millis(1))
        .await;
    assert_eq!(paced, plain);

    let unpaced = scanner.scan_document_paced(&doc, Duration::ZERO).await;
    assert_eq!(unpaced, plain);
}
