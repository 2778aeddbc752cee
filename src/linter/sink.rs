use crate::linter::diagnostics::{Diagnostic, Place};
use crate::linter::error::ConfigError;

/// Collects the diagnostics of a single rule invocation.
#[derive(Debug)]
pub struct Sink {
    rule: &'static str,
    diagnostics: Vec<Diagnostic>,
}

impl Sink {
    pub fn new(rule: &'static str) -> Self {
        Self {
            rule,
            diagnostics: Vec::new(),
        }
    }

    /// Record a style violation and keep going.
    pub fn message(&mut self, reason: impl Into<String>, place: impl Into<Place>) {
        let diagnostic = Diagnostic::warning(place.into(), self.rule, reason);
        log::trace!(
            "{}: {} at {}:{}",
            self.rule,
            diagnostic.message,
            diagnostic.line(),
            diagnostic.column()
        );
        self.diagnostics.push(diagnostic);
    }

    /// Fatal configuration failure. Only raised while configuring a rule,
    /// before its sink exists.
    pub fn fail(rule: &str, reason: impl Into<String>) -> ConfigError {
        ConfigError::invalid(rule, reason)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics in the order they were recorded.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::diagnostics::Severity;
    use stylemark_tree::{Point, Position};

    #[test]
    fn test_keeps_discovery_order() {
        let mut sink = Sink::new("test-rule");
        assert!(sink.is_empty());

        let later = Position::new(Point::new(5, 1, 20), Point::new(5, 4, 23));
        let earlier = Position::new(Point::new(1, 1, 0), Point::new(1, 4, 3));
        sink.message("second", later);
        sink.message("first", earlier);
        sink.message("whole file", Place::File);
        assert_eq!(sink.len(), 3);

        let diagnostics = sink.finish();
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first", "whole file"]);
        assert!(diagnostics.iter().all(|d| d.code == "test-rule"));
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_fail() {
        let err = Sink::fail("rule-style", "Unexpected value `x`");
        assert_eq!(err.rule(), "rule-style");
    }
}
