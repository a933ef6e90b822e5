//! Span and byte offset types for within-line positions.

use text_size::{TextRange, TextSize};

/// A byte offset into a line of source text.
pub type ByteOffset = TextSize;

/// A range within a single line of source text.
///
/// Spans are half-open intervals `[start, end)` of byte offsets measured
/// from the start of the line, not the start of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// The start byte offset (inclusive).
    pub start: ByteOffset,
    /// The end byte offset (exclusive).
    pub end: ByteOffset,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: impl Into<ByteOffset>, end: impl Into<ByteOffset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the length of this span in bytes.
    #[inline]
    pub fn len(&self) -> TextSize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span contains the given offset.
    #[inline]
    pub fn contains(&self, offset: ByteOffset) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the text this span covers within `line`, or `None` when the
    /// span falls outside the line or splits a UTF-8 character.
    #[inline]
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(usize::from(self.start)..usize::from(self.end))
    }

    /// Converts this span to a `TextRange`.
    #[inline]
    pub fn to_range(self) -> TextRange {
        TextRange::new(self.start, self.end)
    }
}

impl From<TextRange> for Span {
    fn from(range: TextRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

impl From<Span> for TextRange {
    fn from(span: Span) -> Self {
        TextRange::new(span.start, span.end)
    }
}
