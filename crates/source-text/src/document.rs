//! Line-addressed document access.

/// Read-only, line-addressed source text.
///
/// Line numbers are 0-indexed. Implementations panic when `line` is called
/// with an out-of-range index; callers iterate `0..line_count()`.
pub trait Document {
    /// Returns the number of lines in the document.
    fn line_count(&self) -> u32;

    /// Returns the text of the line at `index`, without its line terminator.
    fn line(&self, index: u32) -> &str;
}

/// An in-memory document over a borrowed string.
#[derive(Debug, Clone)]
pub struct TextDocument<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TextDocument<'a> {
    /// Splits `text` into lines. Both `\n` and `\r\n` terminators are
    /// recognized; the terminators themselves are not part of any line.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }
}

impl Document for TextDocument<'_> {
    fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    fn line(&self, index: u32) -> &str {
        self.lines[index as usize]
    }
}
