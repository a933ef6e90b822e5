//! Regex token extractors.
//!
//! Each extractor scans one line independently and yields tokens carrying
//! within-line byte offsets. Patterns are compiled once on first use; the
//! regex engine matches in linear time, so hostile input cannot blow up a
//! scan.

use crate::category::TokenCategory;
use regex::Regex;
use smol_str::SmolStr;
use source_text::Span;
use std::sync::LazyLock;

/// A raw extracted token, prior to registry resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text used for lookup and suggestions.
    pub text: SmolStr,
    /// The category that produced this token.
    pub category: TokenCategory,
    /// Byte range within the scanned line.
    pub span: Span,
}

/// Global identifiers the scanner looks for. Extraction is case-sensitive
/// and word-bounded; identifiers outside this list are never candidates.
pub static GLOBAL_IDENTIFIERS: &[&str] = &[
    "AbortController",
    "BroadcastChannel",
    "IntersectionObserver",
    "ResizeObserver",
    "SharedArrayBuffer",
    "URLPattern",
    "fetch",
    "queueMicrotask",
    "structuredClone",
];

static PX_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?px\b").unwrap());

static FUNCTION_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-zA-Z0-9_-]+)\(").unwrap());

static TAG_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([a-zA-Z0-9_-]+)").unwrap());

static GLOBAL_IDENT: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b(?:{})\b", GLOBAL_IDENTIFIERS.join("|"));
    Regex::new(&pattern).unwrap()
});

/// Runs the extractor for `category` over one line.
pub fn extract(line: &str, category: TokenCategory) -> Vec<Token> {
    match category {
        TokenCategory::LengthUnit => extract_px_lengths(line),
        TokenCategory::FunctionCall => extract_function_calls(line),
        TokenCategory::TagName => extract_tag_names(line),
        TokenCategory::GlobalIdent => extract_globals(line),
    }
}

/// Extracts `<number>px` length tokens. The token text and span cover the
/// full length including the unit, e.g. `16px`.
pub fn extract_px_lengths(line: &str) -> Vec<Token> {
    PX_LENGTH
        .find_iter(line)
        .map(|m| token(m.as_str(), TokenCategory::LengthUnit, m.start(), m.end()))
        .collect()
}

/// Extracts function call names: an identifier immediately followed by an
/// opening parenthesis. The span covers the bare identifier only.
pub fn extract_function_calls(line: &str) -> Vec<Token> {
    FUNCTION_CALL
        .captures_iter(line)
        .filter_map(|caps| {
            let name = caps.get(1)?;
            Some(token(
                name.as_str(),
                TokenCategory::FunctionCall,
                name.start(),
                name.end(),
            ))
        })
        .collect()
}

/// Extracts opening tag names. The token text is the bare name, but the
/// span includes the leading `<`. Closing tags never match.
pub fn extract_tag_names(line: &str) -> Vec<Token> {
    TAG_NAME
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(token(
                name.as_str(),
                TokenCategory::TagName,
                whole.start(),
                whole.end(),
            ))
        })
        .collect()
}

/// Extracts allow-listed global identifiers as whole words.
pub fn extract_globals(line: &str) -> Vec<Token> {
    GLOBAL_IDENT
        .find_iter(line)
        .map(|m| token(m.as_str(), TokenCategory::GlobalIdent, m.start(), m.end()))
        .collect()
}

fn token(text: &str, category: TokenCategory, start: usize, end: usize) -> Token {
    Token {
        text: SmolStr::new(text),
        category,
        span: Span::new(start as u32, end as u32),
    }
}
