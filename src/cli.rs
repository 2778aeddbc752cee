use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stylemark")]
#[command(author, version)]
#[command(about = "A style checker for Markdown document trees")]
#[command(
    long_about = "Stylemark checks Markdown documents against a set of style rules. It works on \
    the syntax tree produced by an external Markdown parser (an mdast JSON document) together \
    with the source text it was parsed from, and reports every place where the document departs \
    from the configured style."
)]
#[command(after_help = "\
EXAMPLES:

    # Lint a document using its parsed tree
    stylemark lint README.md --tree README.json

    # Read the source from stdin
    cat README.md | stylemark lint --tree README.json

    # Exit with code 1 when issues are found
    stylemark lint --check README.md --tree README.json

    # Machine-readable output
    stylemark lint --format json README.md --tree README.json

    # List the available rules
    stylemark rules

CONFIGURATION:

Stylemark looks for configuration files in this order:
  1. Explicit --config path
  2. stylemark.toml or .stylemark.toml in current/parent directories
  3. stylemark/config.toml in the user configuration directory
  4. Built-in defaults (every rule enabled)

Example .stylemark.toml:

    [rules]
    final-newline = false
    rule-style = \"* * *\"
    emphasis-marker = \"_\"
    no-missing-blank-lines = { except-tight-lists = true }

For more information, visit: https://github.com/jolars/stylemark")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, stylemark will \
        search for .stylemark.toml or stylemark.toml in the input's directory and its parents, \
        then fall back to stylemark/config.toml in the user configuration directory."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a document against the style rules
    #[command(
        long_about = "Check a Markdown document against stylemark's rules. The document must be \
        accompanied by its syntax tree in mdast JSON form, with byte offsets into the source. \
        Diagnostics are printed to stdout; rules whose configuration is invalid are reported as \
        errors and skipped."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Lint a file
    stylemark lint document.md --tree document.json

    # Fail in CI when anything is reported
    stylemark lint --check document.md --tree document.json")]
    Lint {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Syntax tree of the input as mdast JSON
        #[arg(long, value_name = "TREE")]
        #[arg(
            long_help = "Path to the mdast JSON tree of the input, as produced by an external \
            Markdown parser. Positions in the tree must refer to the input file."
        )]
        tree: PathBuf,

        /// Exit with code 1 if any issues are found
        #[arg(long)]
        check: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },
    /// List the available rules
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per diagnostic
    Human,
    /// A JSON array of reports
    Json,
}
