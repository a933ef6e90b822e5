//! Feature record and status types.

use serde::Deserialize;
use smol_str::SmolStr;
use std::collections::BTreeMap;

/// Cross-browser availability classification of a web platform feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineStatus {
    /// Supported in all major browsers for an extended period.
    Widely,
    /// Recently became supported in all major browsers.
    Newly,
    /// Not yet supported in all major browsers.
    Limited,
    /// The dataset does not classify this feature.
    #[default]
    Unknown,
}

impl BaselineStatus {
    /// Returns the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaselineStatus::Widely => "widely",
            BaselineStatus::Newly => "newly",
            BaselineStatus::Limited => "limited",
            BaselineStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BaselineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One web platform feature's known support state.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    /// Canonical feature identifier, as spelled in the dataset.
    pub id: SmolStr,
    /// Availability classification.
    pub status: BaselineStatus,
    /// Per-browser support. Keys are dataset browser names; the map is not
    /// guaranteed to mention every browser.
    pub support: BTreeMap<SmolStr, bool>,
    /// Link to the feature's specification, when the dataset carries one.
    pub spec_url: Option<String>,
}

impl FeatureRecord {
    /// Returns the recorded support for `browser`, or `None` when the
    /// dataset does not mention it.
    pub fn supports(&self, browser: &str) -> Option<bool> {
        self.support.get(browser).copied()
    }
}
