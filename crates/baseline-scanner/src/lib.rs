//! Line-oriented web platform feature scanning for baseline-check-rs.
//!
//! The scanner tokenizes each line of a document with per-category regex
//! extractors (px lengths, function calls, tag names, allow-listed global
//! identifiers), resolves the tokens against the feature registry, and
//! reports findings carrying support data and rewrite suggestions.
//!
//! # Example
//!
//! ```
//! use baseline_data::FeatureRegistry;
//! use baseline_scanner::{Scanner, TextDocument};
//!
//! let registry = FeatureRegistry::load()?;
//! let scanner = Scanner::new(&registry);
//! let report = scanner.scan_document(&TextDocument::new("margin: 16px;"));
//! assert_eq!(report.finding_count(), 1);
//! # Ok::<(), baseline_data::DataError>(())
//! ```

mod category;
mod extract;
mod finding;
mod scan;
mod suggest;

pub use category::{InclusionPolicy, TokenCategory, SCAN_ORDER};
pub use extract::{
    extract, extract_function_calls, extract_globals, extract_px_lengths, extract_tag_names,
    Token, GLOBAL_IDENTIFIERS,
};
pub use finding::{Finding, FindingStatus, ScanReport};
pub use scan::{ScanOptions, Scanner};
pub use source_text::{Document, Span, TextDocument};
pub use suggest::{convert_px_to_rem, function_suggestion, px_suggestion};
