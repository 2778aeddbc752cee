pub mod config;
pub mod linter;
pub mod position;
pub mod visit;

pub use config::Config;
pub use config::ConfigBuilder;
pub use linter::{ConfigError, Diagnostic, LintReport, Setting};
pub use stylemark_tree;
pub use stylemark_tree::{Node, NodeKind};

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lints a Markdown document given its source and its mdast JSON tree.
///
/// The tree must come from a parser run over exactly `input`, with byte
/// offsets in its positions. Rules whose configuration is invalid are
/// listed in [`LintReport::failures`] and skipped; all other rules run.
///
/// # Examples
///
/// ```no_run
/// let input = "# Title\n";
/// let tree = r#"{"type":"root","children":[]}"#;
/// let report = stylemark::lint(input, tree, None).unwrap();
/// assert!(report.is_clean());
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown source text
/// * `tree_json` - The document tree as mdast JSON
/// * `config` - Optional configuration (defaults to every rule enabled)
pub fn lint(
    input: &str,
    tree_json: &str,
    config: Option<Config>,
) -> serde_json::Result<LintReport> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let tree = stylemark_tree::from_json(tree_json)?;
    let config = config.unwrap_or_default();
    Ok(linter::lint(&tree, input, &config))
}
