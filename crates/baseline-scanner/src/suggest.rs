//! Suggestion rules.

use baseline_data::FeatureRecord;

/// Converts a pixel value to rem units, rounding half away from zero at
/// the fourth decimal.
pub fn convert_px_to_rem(px: f64, base: f64) -> f64 {
    let rem = px / base;
    (rem * 10000.0).round() / 10000.0
}

/// Builds the rewrite suggestion for a px length token, e.g. `16px → 1rem`.
///
/// Returns `None` when the numeric part of the token does not parse; the
/// extractor's pattern guarantees it does for tokens it produced.
pub fn px_suggestion(token_text: &str, base: f64) -> Option<String> {
    let value: f64 = token_text.strip_suffix("px")?.parse().ok()?;
    let rem = convert_px_to_rem(value, base);
    Some(format!("{token_text} → {rem}rem"))
}

/// Builds the suggestion for a function call token. When the record marks
/// `reference_browser` as explicitly unsupported, the suggestion names a
/// vendor-prefixed fallback; in every other case it is the literal `OK`.
pub fn function_suggestion(
    token_text: &str,
    record: &FeatureRecord,
    reference_browser: &str,
) -> String {
    match record.supports(reference_browser) {
        Some(false) => {
            format!("Fallback for {reference_browser}: e.g., -webkit-{token_text} or alternative")
        }
        _ => "OK".to_string(),
    }
}
