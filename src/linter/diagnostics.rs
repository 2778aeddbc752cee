use serde::Serialize;
use stylemark_tree::{Point, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Where a diagnostic applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    Range(Position),
    Point(Point),
    /// The file as a whole, e.g. a missing final newline.
    File,
}

impl Place {
    pub fn start(&self) -> Option<Point> {
        match self {
            Place::Range(position) => Some(position.start),
            Place::Point(point) => Some(*point),
            Place::File => None,
        }
    }

    pub fn end(&self) -> Option<Point> {
        match self {
            Place::Range(position) => Some(position.end),
            Place::Point(point) => Some(*point),
            Place::File => None,
        }
    }

    /// 1-indexed line and column of the start, `1:1` for file-level places.
    pub fn line_col(&self) -> (usize, usize) {
        self.start().map_or((1, 1), |p| (p.line, p.column))
    }
}

impl From<Position> for Place {
    fn from(position: Position) -> Self {
        Place::Range(position)
    }
}

impl From<Point> for Place {
    fn from(point: Point) -> Self {
        Place::Point(point)
    }
}

impl From<Option<Position>> for Place {
    fn from(position: Option<Position>) -> Self {
        position.map_or(Place::File, Place::Range)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub place: Place,
    pub message: String,
    pub code: String,
}

impl Diagnostic {
    pub fn error(place: Place, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            place,
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn warning(place: Place, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            place,
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn line(&self) -> usize {
        self.place.line_col().0
    }

    pub fn column(&self) -> usize {
        self.place.line_col().1
    }
}

/// Wire form of a diagnostic for machine-readable reports.
///
/// Line and column fields are left out for file-level diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub rule_identifier: &'a str,
    pub reason: &'a str,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,
}

impl<'a> From<&'a Diagnostic> for Report<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        let start = diagnostic.place.start();
        let end = diagnostic.place.end();
        Self {
            rule_identifier: &diagnostic.code,
            reason: &diagnostic.message,
            severity: diagnostic.severity,
            start_line: start.map(|p| p.line),
            start_column: start.map(|p| p.column),
            end_line: end.map(|p| p.line),
            end_column: end.map(|p| p.column),
        }
    }
}
