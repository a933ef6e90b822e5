//! Line-addressed source text primitives for baseline-check-rs.
//!
//! This crate provides the `Document` abstraction the scanner reads source
//! through (line count plus per-line text) and the `Span` type findings use
//! to point at byte ranges within a single line.

mod document;
mod span;

pub use document::{Document, TextDocument};
pub use span::{ByteOffset, Span};
