//! Offset to line/column conversion.

use text_size::TextSize;

/// Maps byte offsets in a source text to 1-based line and column numbers.
///
/// Columns count characters, not bytes, so a multi-byte character advances
/// the column by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    text: Box<str>,
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Builds the index for `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }
        Self {
            text: text.into(),
            line_starts,
        }
    }

    /// Returns the 1-based `(line, column)` of `offset`.
    ///
    /// Offsets past the end of the text resolve to the last position.
    #[must_use]
    pub fn line_col(&self, offset: TextSize) -> (u32, u32) {
        let offset = offset.min(TextSize::of(&*self.text));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let column = self
            .text
            .get(start..usize::from(offset))
            .map_or(0, |prefix| prefix.chars().count());
        (line as u32 + 1, column as u32 + 1)
    }

    /// Returns the indexed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
