//! dirlist: lists the directories, files and a type-filtered subset of a path.
//!
//! The binary parses arguments, initialises logging, loads configuration
//! and prints three sections produced by `dirlist-core`.

mod render;
mod sections;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dirlist_core::{Config, EntryType, OutputFormat, SortMode};
use tracing_subscriber::EnvFilter;

use crate::render::{render_json, render_text};
use crate::sections::Sections;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// Keep the order the OS returned
    None,
    /// Case-insensitive by name
    Name,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortMode::None,
            SortArg::Name => SortMode::Name,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to list
    path: PathBuf,

    /// Entry type for the "Filtered" section (e.g. dir, file, symlink)
    #[arg(long = "type", value_name = "TYPE")]
    filter_type: Option<EntryType>,

    /// TOML configuration file
    #[arg(long, env = "DIRLIST_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a JSON document instead of text sections
    #[arg(long)]
    json: bool,

    /// Ordering of each section
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Plain headings without terminal styling
    #[arg(long)]
    no_bold: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Loads the config file (if any) and applies command-line overrides.
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load_or_default(self.config.as_deref())?;
        if let Some(ty) = self.filter_type {
            config.output.filter_type = ty;
        }
        if let Some(sort) = self.sort {
            config.output.sort = sort.into();
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if self.no_bold || !std::io::stdout().is_terminal() {
            config.output.bold_headings = false;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "dirlist=debug,dirlist_core=debug"
    } else {
        "dirlist=warn,dirlist_core=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    tracing::debug!(?config, "resolved configuration");

    let sections = Sections::collect(&cli.path, &config)?;

    let output = match config.output.format {
        OutputFormat::Text => render_text(&sections, config.output.sort, config.output.bold_headings),
        OutputFormat::Json => render_json(&sections, config.output.sort)?,
    };
    print!("{output}");
    if config.output.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
