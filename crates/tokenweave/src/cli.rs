//! Command-line interface.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use console::style;

use tokenweave_core::{Diagnostic, Severity};
use tokenweave_source::{DocumentSource, FileSource, RemoteSource};

use crate::config::{SyncConfig, DEFAULT_CSS_OUT, DEFAULT_JSON_OUT};
use crate::sync;

#[derive(Debug, Parser)]
#[command(
    name = "tokenweave",
    version,
    about = "Sync a design token document into theme-scoped CSS custom properties"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the token document and regenerate the CSS artifacts.
    Sync(SyncArgs),
    /// Validate the token document without writing anything.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Fetch the token document from this URL.
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Read the token document from a local file instead of fetching.
    #[arg(long)]
    input: Option<PathBuf>,
}

impl SourceArgs {
    fn source(&self) -> Box<dyn DocumentSource> {
        match (&self.input, &self.url) {
            (Some(path), _) => Box::new(FileSource::new(path)),
            (None, Some(url)) => Box::new(RemoteSource::new(url)),
            (None, None) => Box::new(RemoteSource::default()),
        }
    }
}

#[derive(Debug, Args)]
struct SyncArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Where to write the generated stylesheet.
    #[arg(long, default_value = DEFAULT_CSS_OUT)]
    css: PathBuf,

    /// Where to persist the raw token document.
    #[arg(long, default_value = DEFAULT_JSON_OUT)]
    json: PathBuf,

    /// Use a passthrough catalogue file instead of the embedded one.
    #[arg(long)]
    passthrough: Option<PathBuf>,

    /// Report document diagnostics after generation; exit non-zero on
    /// errors.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,
}

/// Parses arguments and runs the selected command.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Sync(args) => run_sync(args),
        Command::Check(args) => run_check(args),
    }
}

fn run_sync(args: SyncArgs) -> anyhow::Result<()> {
    let source = args.source.source();
    let mut config = SyncConfig::new()
        .css_out(args.css)
        .json_out(args.json)
        .strict(args.strict);
    if let Some(path) = args.passthrough {
        config = config.passthrough(path);
    }

    println!("Fetching design tokens from {}", source.origin());
    let outcome = sync::run(&config, source.as_ref())?;

    println!(
        "{} Saved raw tokens to {}",
        style("✓").green(),
        outcome.json_path.display()
    );
    println!(
        "{} Generated {} ({} core, {} standard, {} eco)",
        style("✓").green(),
        outcome.css_path.display(),
        outcome.core_count,
        outcome.standard_count,
        outcome.eco_count
    );
    report_diagnostics(&outcome.diagnostics)
}

fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    let source = args.source.source();
    println!("Checking design tokens from {}", source.origin());
    let diagnostics = sync::check(source.as_ref())?;
    if diagnostics.is_empty() {
        println!("{} Token document is clean", style("✓").green());
    }
    report_diagnostics(&diagnostics)
}

/// Prints collected diagnostics and fails on error severity. Output was
/// already written by that point; partial success is deliberate.
fn report_diagnostics(diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
    for diagnostic in diagnostics {
        match diagnostic.severity() {
            Severity::Warning => {
                eprintln!("{} {diagnostic}", style("warning:").yellow().bold())
            }
            Severity::Error => eprintln!("{} {diagnostic}", style("error:").red().bold()),
        }
    }
    let errors = diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity() == Severity::Error)
        .count();
    if errors > 0 {
        bail!("token document has {errors} error(s)");
    }
    Ok(())
}
