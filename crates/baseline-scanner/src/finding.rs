//! Finding and report types.

use baseline_data::BaselineStatus;
use smol_str::SmolStr;
use source_text::Span;
use std::collections::BTreeMap;

/// Support maturity reported on a finding.
///
/// Extends [`BaselineStatus`] with a sentinel for tokens that are reported
/// without a matching dataset entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FindingStatus {
    /// Supported in all major browsers for an extended period.
    Widely,
    /// Recently became supported in all major browsers.
    Newly,
    /// Not yet supported in all major browsers.
    Limited,
    /// The dataset has the feature but does not classify it.
    Unknown,
    /// The token was reported without a dataset entry.
    NotFound,
}

impl FindingStatus {
    /// Returns the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Widely => "widely",
            FindingStatus::Newly => "newly",
            FindingStatus::Limited => "limited",
            FindingStatus::Unknown => "unknown",
            FindingStatus::NotFound => "not-found",
        }
    }

    /// Human phrasing used by renderers.
    pub fn describe(&self) -> &'static str {
        match self {
            FindingStatus::Widely => "widely available",
            FindingStatus::Newly => "newly available",
            FindingStatus::Limited => "limited availability",
            FindingStatus::Unknown => "unknown status",
            FindingStatus::NotFound => "status not found",
        }
    }
}

impl From<BaselineStatus> for FindingStatus {
    fn from(status: BaselineStatus) -> Self {
        match status {
            BaselineStatus::Widely => FindingStatus::Widely,
            BaselineStatus::Newly => FindingStatus::Newly,
            BaselineStatus::Limited => FindingStatus::Limited,
            BaselineStatus::Unknown => FindingStatus::Unknown,
        }
    }
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported token occurrence with its resolved support data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finding {
    /// 0-indexed line the token was found on.
    pub line: u32,
    /// Byte range within that line.
    pub span: Span,
    /// Canonical feature id, or the literal `px` for length findings.
    pub feature_id: Option<SmolStr>,
    /// Support maturity of the resolved feature.
    pub status: FindingStatus,
    /// Remediation hint, for categories that produce one.
    pub suggestion: Option<String>,
    /// Per-browser support copied from the resolved record.
    pub support: BTreeMap<SmolStr, bool>,
    /// Specification link copied from the resolved record.
    pub spec_url: Option<String>,
}

/// Per-document scan result: line number to the ordered findings on it.
///
/// Lines that produced no findings are absent from the report; renderers
/// rely on that to skip clean lines without re-checking them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    lines: BTreeMap<u32, Vec<Finding>>,
}

impl ScanReport {
    /// Records a line's findings. An empty list is dropped so the line
    /// stays absent from the report.
    pub fn insert_line(&mut self, line: u32, findings: Vec<Finding>) {
        if !findings.is_empty() {
            self.lines.insert(line, findings);
        }
    }

    /// Returns the findings for a line, or `None` when the line is absent.
    pub fn line(&self, line: u32) -> Option<&[Finding]> {
        self.lines.get(&line).map(Vec::as_slice)
    }

    /// Iterates reported lines in ascending line order.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &[Finding])> {
        self.lines
            .iter()
            .map(|(line, findings)| (*line, findings.as_slice()))
    }

    /// Iterates every finding in report order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.lines.values().flatten()
    }

    /// Returns the number of lines that have findings.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total number of findings.
    pub fn finding_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    /// Returns true when no line produced findings.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
