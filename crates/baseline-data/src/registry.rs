//! Feature registry construction and lookup.

use crate::record::{BaselineStatus, FeatureRecord};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use smol_str::SmolStr;
use std::collections::BTreeMap;
use thiserror::Error;

/// The embedded web-features dataset snapshot.
static EMBEDDED_DATASET: &str = include_str!("../data/web-features.json");

/// Errors raised while constructing a [`FeatureRegistry`].
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset is not valid JSON or does not match the expected shape.
    #[error("failed to parse feature dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset parsed but carries no features.
    #[error("feature dataset contains no features")]
    Empty,

    /// Two dataset ids collide after ASCII case folding.
    #[error("duplicate feature id after case folding: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    version: String,
    features: BTreeMap<SmolStr, RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    status: Option<RawStatus>,
    #[serde(default)]
    spec: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    baseline: Option<BaselineStatus>,
    #[serde(default)]
    support: BTreeMap<SmolStr, bool>,
}

/// Immutable table of web platform features keyed by canonical id.
///
/// Lookup ignores ASCII case. Construction fails rather than producing an
/// empty or ambiguous registry, so a successfully built registry always
/// answers lookups against the full dataset snapshot.
#[derive(Debug)]
pub struct FeatureRegistry {
    version: String,
    index: FxHashMap<SmolStr, FeatureRecord>,
}

impl FeatureRegistry {
    /// Loads the registry from the embedded dataset snapshot.
    pub fn load() -> Result<Self, DataError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Builds a registry from a JSON dataset.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        if raw.features.is_empty() {
            return Err(DataError::Empty);
        }

        let mut index =
            FxHashMap::with_capacity_and_hasher(raw.features.len(), Default::default());
        for (id, feature) in raw.features {
            let (status, support) = match feature.status {
                Some(status) => (status.baseline.unwrap_or_default(), status.support),
                None => (BaselineStatus::Unknown, BTreeMap::new()),
            };
            let record = FeatureRecord {
                id: id.clone(),
                status,
                support,
                // Datasets may list several spec links; keep the first.
                spec_url: feature.spec.into_iter().next(),
            };

            let key = fold_id(&id);
            if index.insert(key, record).is_some() {
                return Err(DataError::DuplicateId(id.to_string()));
            }
        }

        Ok(Self {
            version: raw.version,
            index,
        })
    }

    /// Looks up a feature by canonical id, ignoring ASCII case.
    ///
    /// `None` means the id is not in the dataset. That is an expected
    /// outcome for arbitrary scanned tokens, not an error.
    pub fn lookup(&self, id: &str) -> Option<&FeatureRecord> {
        if id.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.get(fold_id(id).as_str())
        } else {
            self.index.get(id)
        }
    }

    /// Returns the dataset snapshot version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the number of features in the registry.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the registry holds no features.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn fold_id(id: &str) -> SmolStr {
    SmolStr::new(id.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_embedded_dataset() {
        let registry = FeatureRegistry::load().unwrap();
        assert!(!registry.is_empty());
        assert!(!registry.version().is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = FeatureRegistry::load().unwrap();
        let lower = registry.lookup("fetch").unwrap();
        let mixed = registry.lookup("Fetch").unwrap();
        let upper = registry.lookup("FETCH").unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower, upper);
        assert_eq!(lower.id, "fetch");
    }

    #[test]
    fn test_lookup_preserves_dataset_spelling() {
        let registry = FeatureRegistry::load().unwrap();
        let record = registry.lookup("abortcontroller").map(|r| r.id.as_str());
        assert_eq!(record, None);

        let record = registry.lookup("api.abortcontroller").unwrap();
        assert_eq!(record.id, "api.AbortController");
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let registry = FeatureRegistry::load().unwrap();
        assert!(registry.lookup("blur").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_record_fields_from_dataset() {
        let registry = FeatureRegistry::load().unwrap();
        let record = registry.lookup("css-functions.image-set").unwrap();
        assert_eq!(record.status, BaselineStatus::Newly);
        assert_eq!(record.supports("safari"), Some(false));
        assert_eq!(record.supports("chrome"), Some(true));
        assert_eq!(
            record.spec_url.as_deref(),
            Some("https://drafts.csswg.org/css-images-4/#image-set-notation")
        );
    }

    #[test]
    fn test_missing_baseline_is_unknown() {
        let registry = FeatureRegistry::load().unwrap();
        let record = registry.lookup("SharedArrayBuffer").unwrap();
        assert_eq!(record.status, BaselineStatus::Unknown);
        assert_eq!(record.supports("chrome"), Some(true));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let result = FeatureRegistry::from_json(r#"{"version": "0.0.0", "features": {}}"#);
        assert!(matches!(result, Err(DataError::Empty)));
    }

    #[test]
    fn test_malformed_dataset_rejected() {
        let result = FeatureRegistry::from_json("not json");
        assert!(matches!(result, Err(DataError::Parse(_))));

        let result = FeatureRegistry::from_json(r#"{"features": {}}"#);
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn test_case_folded_duplicate_rejected() {
        let json = r#"{
            "version": "0.0.0",
            "features": {
                "Fetch": { "status": { "baseline": "widely" } },
                "fetch": { "status": { "baseline": "widely" } }
            }
        }"#;
        let result = FeatureRegistry::from_json(json);
        assert!(matches!(result, Err(DataError::DuplicateId(_))));
    }

    #[test]
    fn test_feature_without_status_object() {
        let json = r#"{
            "version": "0.0.0",
            "features": {
                "mystery": { "spec": ["https://example.com/spec"] }
            }
        }"#;
        let registry = FeatureRegistry::from_json(json).unwrap();
        let record = registry.lookup("mystery").unwrap();
        assert_eq!(record.status, BaselineStatus::Unknown);
        assert!(record.support.is_empty());
        assert_eq!(record.spec_url.as_deref(), Some("https://example.com/spec"));
    }

    #[test]
    fn test_first_spec_link_kept() {
        let json = r#"{
            "version": "0.0.0",
            "features": {
                "multi": {
                    "status": { "baseline": "newly" },
                    "spec": ["https://first.example/", "https://second.example/"]
                }
            }
        }"#;
        let registry = FeatureRegistry::from_json(json).unwrap();
        let record = registry.lookup("multi").unwrap();
        assert_eq!(record.spec_url.as_deref(), Some("https://first.example/"));
    }
}
