//! Embedded web platform feature support data for baseline-check-rs.
//!
//! This crate owns the versioned web-features dataset snapshot and exposes
//! it as an immutable, case-insensitive registry, plus the curated table
//! that maps raw scanned tokens to canonical dataset ids.
//!
//! # Example
//!
//! ```
//! use baseline_data::FeatureRegistry;
//!
//! let registry = FeatureRegistry::load()?;
//! if let Some(feature) = registry.lookup("fetch") {
//!     println!("{}: {}", feature.id, feature.status);
//! }
//! # Ok::<(), baseline_data::DataError>(())
//! ```

mod curated;
mod record;
mod registry;

pub use curated::{curated_feature_id, FeatureClass, CURATED_FEATURE_IDS};
pub use record::{BaselineStatus, FeatureRecord};
pub use registry::{DataError, FeatureRegistry};
