//! Source positions.
//!
//! Tokens carry a 1-based line/column pair rather than a byte span: the
//! generator only ever reports locations, it never slices source back out.

use std::fmt;

/// 1-based line and column of a character in the source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Pre-computed line offset table for line/column lookup.
///
/// Built once per source; each lookup is a binary search over the line
/// starts followed by a character count within the line.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0]` is always 0.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build the table by scanning the source for newlines.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i + 1));
        LineOffsetTable { offsets }
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Convert a byte offset into a `Position`.
    ///
    /// The column counts characters, not bytes. Offsets past the end of the
    /// source are clamped to it.
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let offset = offset.min(source.len());
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.offsets[line_idx];
        let column = source
            .get(line_start..offset)
            .map_or(0, |text| text.chars().count());
        Position::new(to_u32(line_idx + 1), to_u32(column + 1))
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
