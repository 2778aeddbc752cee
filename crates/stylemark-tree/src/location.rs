use serde::{Deserialize, Serialize};
use std::fmt;

/// A place in the source text.
///
/// `line` and `column` are 1-indexed, `offset` is a 0-indexed byte offset.
/// Parsers that do not track offsets may leave it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset: Some(offset),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end of a node in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Converts byte offsets in a source string to [`Point`]s.
pub struct Locator<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> Locator<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            source,
            line_starts,
        }
    }

    /// Point for a byte offset; `None` past the end or inside a character.
    pub fn to_point(&self, offset: usize) -> Option<Point> {
        if offset > self.source.len() || !self.source.is_char_boundary(offset) {
            return None;
        }

        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index - 1,
        };
        let line_start = self.line_starts[line_index];
        let column = self.source[line_start..offset].chars().count() + 1;

        Some(Point::new(line_index + 1, column, offset))
    }

    /// Byte offset of a line/column pair.
    ///
    /// The column right after the last character of a line (its line ending)
    /// is valid; anything further is `None`.
    pub fn to_offset(&self, line: usize, column: usize) -> Option<usize> {
        let line_start = *self.line_starts.get(line.checked_sub(1)?)?;
        let line_end = self
            .line_starts
            .get(line)
            .map_or(self.source.len(), |next| next - 1);

        self.source[line_start..line_end]
            .char_indices()
            .map(|(i, _)| line_start + i)
            .chain(std::iter::once(line_end))
            .nth(column.checked_sub(1)?)
    }

    pub fn position(&self, start: usize, end: usize) -> Option<Position> {
        Some(Position::new(self.to_point(start)?, self.to_point(end)?))
    }

    /// Position of the `nth` (0-based) occurrence of `needle`.
    ///
    /// Mostly useful to attach positions to hand-built trees.
    pub fn find(&self, needle: &str, nth: usize) -> Option<Position> {
        let (start, _) = self.source.match_indices(needle).nth(nth)?;
        self.position(start, start + needle.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_point() {
        let locator = Locator::new("line 1\nline 2\nline 3");

        assert_eq!(locator.to_point(0), Some(Point::new(1, 1, 0)));
        assert_eq!(locator.to_point(6), Some(Point::new(1, 7, 6)));
        assert_eq!(locator.to_point(7), Some(Point::new(2, 1, 7)));
        assert_eq!(locator.to_point(14), Some(Point::new(3, 1, 14)));
        assert_eq!(locator.to_point(20), Some(Point::new(3, 7, 20)));
        assert_eq!(locator.to_point(21), None);
    }

    #[test]
    fn test_to_point_counts_characters() {
        let locator = Locator::new("é*a*");
        assert_eq!(locator.to_point(2), Some(Point::new(1, 2, 2)));
        assert_eq!(locator.to_point(1), None);
    }

    #[test]
    fn test_to_offset() {
        let locator = Locator::new("ab\ncd\n");
        assert_eq!(locator.to_offset(1, 1), Some(0));
        assert_eq!(locator.to_offset(2, 2), Some(4));
        assert_eq!(locator.to_offset(2, 3), Some(5));
        assert_eq!(locator.to_offset(3, 1), Some(6));
        assert_eq!(locator.to_offset(0, 1), None);
        assert_eq!(locator.to_offset(4, 1), None);
    }

    #[test]
    fn test_to_offset_stays_on_its_line() {
        let locator = Locator::new("ab\ncd\n");
        assert_eq!(locator.to_offset(1, 3), Some(2));
        assert_eq!(locator.to_offset(1, 4), None);
        assert_eq!(locator.to_offset(1, 5), None);
        assert_eq!(locator.to_offset(2, 4), None);
        assert_eq!(locator.to_offset(3, 2), None);
        assert_eq!(locator.to_offset(1, 0), None);

        let locator = Locator::new("é*\nx");
        assert_eq!(locator.to_offset(1, 2), Some(2));
        assert_eq!(locator.to_offset(2, 2), Some(5));
        assert_eq!(locator.to_offset(2, 3), None);
    }

    #[test]
    fn test_find() {
        let locator = Locator::new("# Alpha\n\n# Alpha\n");
        let second = locator.find("# Alpha", 1).unwrap();
        assert_eq!(second.start, Point::new(3, 1, 9));
        assert_eq!(second.end, Point::new(3, 8, 16));
        assert_eq!(locator.find("# Alpha", 2), None);
    }

    #[test]
    fn test_display() {
        let position = Position::new(Point::new(3, 1, 9), Point::new(3, 8, 16));
        assert_eq!(position.start.to_string(), "3:1");
        assert_eq!(position.to_string(), "3:1-3:8");
    }
}
