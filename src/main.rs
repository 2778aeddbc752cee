use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use stylemark::linter::{Diagnostic, LintReport, Report, RuleRegistry, Severity};

mod cli;
use cli::{Cli, Commands, OutputFormat};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn read_tree(path: &Path) -> io::Result<stylemark_tree::Node> {
    let json = fs::read_to_string(path)?;
    stylemark_tree::from_json(&json).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid tree {}: {e}", path.display()),
        )
    })
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lint {
            file,
            tree,
            check,
            format,
        } => {
            let start_dir = start_dir_for(&file)?;
            let (cfg, cfg_path) = stylemark::config::load(cli.config.as_deref(), &start_dir)?;

            if let Some(path) = &cfg_path {
                log::debug!("Using config from: {}", path.display());
            } else {
                log::debug!("Using default config");
            }

            let input = read_all(file.as_ref())?;
            let tree = read_tree(&tree)?;
            let report = stylemark::linter::lint(&tree, &input, &cfg);

            match format {
                OutputFormat::Human => print_diagnostics(&report, file.as_ref(), check),
                OutputFormat::Json => print_json(&report)?,
            }

            if check && !report.is_clean() {
                std::process::exit(1);
            }

            Ok(())
        }
        Commands::Rules => {
            for spec in RuleRegistry::builtin().rules() {
                println!("{:<34}{}", spec.name, spec.description);
            }
            Ok(())
        }
    }
}

/// Configuration failures first, then style diagnostics by position.
fn collect(report: &LintReport) -> Vec<Diagnostic> {
    report
        .failures
        .iter()
        .map(|e| e.to_diagnostic())
        .chain(report.sorted().into_iter().cloned())
        .collect()
}

fn print_diagnostics(report: &LintReport, file: Option<&PathBuf>, check: bool) {
    let file_name = file.and_then(|p| p.to_str()).unwrap_or("<stdin>");
    let diagnostics = collect(report);

    if diagnostics.is_empty() {
        if !check {
            println!("No issues found");
        }
        return;
    }

    for diag in &diagnostics {
        let severity_str = match diag.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",     // red
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
        };

        println!(
            "{severity_str}[{}]: {} at {}:{}:{}",
            diag.code,
            diag.message,
            file_name,
            diag.line(),
            diag.column()
        );
    }

    println!("\nFound {} issue(s)", diagnostics.len());
}

fn print_json(report: &LintReport) -> io::Result<()> {
    let diagnostics = collect(report);
    let reports: Vec<Report> = diagnostics.iter().map(Report::from).collect();
    let json = serde_json::to_string_pretty(&reports).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}
