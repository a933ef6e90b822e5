//! Line and document scanning.

use crate::category::{InclusionPolicy, TokenCategory, SCAN_ORDER};
use crate::extract::{extract, Token};
use crate::finding::{Finding, FindingStatus, ScanReport};
use crate::suggest::{function_suggestion, px_suggestion};
use baseline_data::{curated_feature_id, BaselineStatus, FeatureRecord, FeatureRegistry};
use smol_str::SmolStr;
use source_text::Document;
use std::time::Duration;

/// Registry id queried to decorate length findings with browser data.
const PX_DECORATION_ID: &str = "css-values-px";

/// Tunable scanning parameters.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Root em size used for px to rem suggestions.
    pub rem_base: f64,
    /// Browser whose explicit lack of support triggers fallback
    /// suggestions on function call findings.
    pub reference_browser: SmolStr,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            rem_base: 16.0,
            reference_browser: SmolStr::new_static("safari"),
        }
    }
}

/// Scans lines of source text against a feature registry.
///
/// A scanner borrows its registry, so any number of scanners (and scans)
/// can share one loaded dataset across threads.
#[derive(Debug)]
pub struct Scanner<'r> {
    registry: &'r FeatureRegistry,
    options: ScanOptions,
}

impl<'r> Scanner<'r> {
    /// Creates a scanner with default options.
    pub fn new(registry: &'r FeatureRegistry) -> Self {
        Self::with_options(registry, ScanOptions::default())
    }

    /// Creates a scanner with the given options.
    pub fn with_options(registry: &'r FeatureRegistry, options: ScanOptions) -> Self {
        Self { registry, options }
    }

    /// Scans one line, returning findings in category order and, within a
    /// category, left to right. Tokens the registry does not know are
    /// filtered by each category's policy, never raised as errors.
    pub fn scan_line(&self, line: u32, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for category in SCAN_ORDER {
            for token in extract(text, category) {
                if let Some(finding) = self.finding_for(line, &token) {
                    findings.push(finding);
                }
            }
        }
        findings
    }

    /// Scans every line of a document.
    pub fn scan_document(&self, doc: &impl Document) -> ScanReport {
        let mut report = ScanReport::default();
        for line in 0..doc.line_count() {
            report.insert_line(line, self.scan_line(line, doc.line(line)));
        }
        report
    }

    /// Scans a document, sleeping for `pacing` between lines.
    ///
    /// The report is identical to [`scan_document`](Self::scan_document);
    /// pacing only spreads the work out, and each sleep is an await point
    /// the caller can cancel at by dropping the future.
    pub async fn scan_document_paced(&self, doc: &impl Document, pacing: Duration) -> ScanReport {
        let mut report = ScanReport::default();
        let line_count = doc.line_count();
        for line in 0..line_count {
            report.insert_line(line, self.scan_line(line, doc.line(line)));
            if !pacing.is_zero() && line + 1 < line_count {
                tokio::time::sleep(pacing).await;
            }
        }
        report
    }

    fn finding_for(&self, line: u32, token: &Token) -> Option<Finding> {
        match token.category.inclusion_policy() {
            InclusionPolicy::Always => Some(self.length_finding(line, token)),
            InclusionPolicy::RequireRecord => {
                let record = self.resolve(token)?;
                Some(self.record_finding(line, token, record))
            }
            InclusionPolicy::RequireKnownStatus => {
                let record = self.resolve(token)?;
                if record.status == BaselineStatus::Unknown {
                    return None;
                }
                Some(self.record_finding(line, token, record))
            }
        }
    }

    /// Resolves a token to its feature record: raw id first, then the
    /// curated mapping for the token's class on a miss.
    fn resolve(&self, token: &Token) -> Option<&'r FeatureRecord> {
        if let Some(record) = self.registry.lookup(&token.text) {
            return Some(record);
        }
        let class = token.category.feature_class()?;
        let id = curated_feature_id(class, &token.text)?;
        self.registry.lookup(id)
    }

    /// Length findings are always reported: the feature id is the literal
    /// `px` and the status stays not-found, but browser and spec data are
    /// borrowed from the dataset's px entry when it exists.
    fn length_finding(&self, line: u32, token: &Token) -> Finding {
        let decoration = self.registry.lookup(PX_DECORATION_ID);
        Finding {
            line,
            span: token.span,
            feature_id: Some(SmolStr::new_static("px")),
            status: FindingStatus::NotFound,
            suggestion: px_suggestion(&token.text, self.options.rem_base),
            support: decoration
                .map(|record| record.support.clone())
                .unwrap_or_default(),
            spec_url: decoration.and_then(|record| record.spec_url.clone()),
        }
    }

    fn record_finding(&self, line: u32, token: &Token, record: &FeatureRecord) -> Finding {
        let suggestion = match token.category {
            TokenCategory::FunctionCall => Some(function_suggestion(
                &token.text,
                record,
                &self.options.reference_browser,
            )),
            _ => None,
        };
        Finding {
            line,
            span: token.span,
            feature_id: Some(record.id.clone()),
            status: record.status.into(),
            suggestion,
            support: record.support.clone(),
            spec_url: record.spec_url.clone(),
        }
    }
}
