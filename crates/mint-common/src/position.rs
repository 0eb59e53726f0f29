//! Caret positions and line/column <-> byte offset conversion.
//!
//! The scanner stamps tokens with 1-based lines and 0-based columns, the
//! convention editors hand us a caret in. The parse tree uses byte offsets.
//! `LineMap` converts between the two.

use memchr::memchr_iter;
use serde::{Deserialize, Serialize};

/// The cursor location at which completion is requested.
///
/// `line` is 1-based and `column` is 0-based, matching the scanner's token
/// stamping. A caret at the very start of a file is `(1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaretPosition {
    /// 1-based line number
    pub line: u32,
    /// 0-based column, counted in characters
    pub column: u32,
}

impl CaretPosition {
    pub fn new(line: u32, column: u32) -> CaretPosition {
        CaretPosition { line, column }
    }
}

/// Line map for efficient offset <-> position conversion.
/// Stores the starting byte offset of each line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Starting offset of each line (`line_starts[0]` is always 0)
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn build(source: &str) -> LineMap {
        let mut line_starts = vec![0u32];
        for nl in memchr_iter(b'\n', source.as_bytes()) {
            line_starts.push((nl + 1) as u32);
        }
        LineMap { line_starts }
    }

    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Convert a byte offset to a caret position. Offsets past the end of
    /// the text clamp to the last line.
    pub fn offset_to_caret(&self, offset: u32) -> CaretPosition {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        CaretPosition {
            line: line_idx as u32 + 1,
            column: offset.saturating_sub(line_start),
        }
    }

    /// Convert a caret position back to a byte offset. Returns `None` when
    /// the line does not exist; the column is clamped to the line length by
    /// the caller's use of the offset, not here.
    pub fn caret_to_offset(&self, caret: CaretPosition) -> Option<u32> {
        if caret.line == 0 {
            return None;
        }
        let line_start = self.line_starts.get(caret.line as usize - 1)?;
        Some(line_start + caret.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offsets_across_lines() {
        let map = LineMap::build("ab\ncd\n\nef");
        assert_eq!(map.offset_to_caret(0), CaretPosition::new(1, 0));
        assert_eq!(map.offset_to_caret(1), CaretPosition::new(1, 1));
        assert_eq!(map.offset_to_caret(3), CaretPosition::new(2, 0));
        assert_eq!(map.offset_to_caret(6), CaretPosition::new(3, 0));
        assert_eq!(map.offset_to_caret(8), CaretPosition::new(4, 1));
    }

    #[test]
    fn round_trips_caret_positions() {
        let map = LineMap::build("fun test() {\n}\n");
        let caret = CaretPosition::new(2, 0);
        let offset = map.caret_to_offset(caret).unwrap();
        assert_eq!(offset, 13);
        assert_eq!(map.offset_to_caret(offset), caret);
    }

    #[test]
    fn rejects_out_of_range_lines() {
        let map = LineMap::build("x");
        assert_eq!(map.caret_to_offset(CaretPosition::new(0, 0)), None);
        assert_eq!(map.caret_to_offset(CaretPosition::new(5, 0)), None);
    }
}
