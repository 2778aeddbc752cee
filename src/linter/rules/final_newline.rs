use stylemark_tree::Node;

use crate::linter::diagnostics::Place;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;

const NAME: &str = "final-newline";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Files should end with a newline",
    configure,
};

pub struct FinalNewlineRule;

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    setting.expect_none(NAME)?;
    Ok(Box::new(FinalNewlineRule))
}

impl Rule for FinalNewlineRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, _tree: &Node, input: &str, sink: &mut Sink) {
        if !input.is_empty() && !input.ends_with('\n') {
            sink.message("Missing newline character at end of file", Place::File);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::rules::testing::lint;
    use stylemark_tree::builder::*;

    #[test]
    fn test_missing_newline() {
        let diagnostics = lint(&SPEC, Setting::Default, &root(vec![]), "Alpha");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].place, Place::File);
        assert_eq!((diagnostics[0].line(), diagnostics[0].column()), (1, 1));
        assert_eq!(diagnostics[0].message, "Missing newline character at end of file");
    }

    #[test]
    fn test_trailing_newline() {
        assert!(lint(&SPEC, Setting::Default, &root(vec![]), "Alpha\n").is_empty());
        assert!(lint(&SPEC, Setting::Default, &root(vec![]), "Alpha\r\n").is_empty());
    }

    #[test]
    fn test_empty_file() {
        assert!(lint(&SPEC, Setting::Default, &root(vec![]), "").is_empty());
    }

    #[test]
    fn test_rejects_options() {
        assert!((SPEC.configure)(&Setting::from("lf")).is_err());
    }
}
