//! Argument definitions for `onto`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use onto_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "onto",
    version,
    about = "Compile biodiversity field-definition sheets into an OWL ontology",
    long_about = "Compile a field-definition sheet and an option-set sheet into an OWL ontology.\n\n\
                  Fields are classified into semantic classes, enumerated values become named\n\
                  individuals, and the result is checked for consistency and written as RDF/XML."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile the sheets and write `<name>.owl`.
    Compile(CompileArgs),

    /// List the semantic classes fields are sorted into.
    Classes,
}

#[derive(Parser)]
pub struct CompileArgs {
    /// Field-definition sheet (CSV, or TSV for .tsv/.tab files).
    #[arg(value_name = "FIELD_SHEET")]
    pub field_sheet: PathBuf,

    /// Option-set sheet: one column per option set.
    #[arg(value_name = "OPTION_SHEET")]
    pub option_sheet: PathBuf,

    /// Output directory (default: from config, else the current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Ontology name; the artifact is written as `<NAME>.owl`.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Namespace IRI for every generated entity.
    #[arg(long = "base-iri", value_name = "IRI")]
    pub base_iri: Option<String>,

    /// TOML file with default options.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Abort without writing when the ontology is inconsistent or the check
    /// times out.
    #[arg(long = "fail-closed")]
    pub fail_closed: bool,

    /// Cap on the consistency check in seconds; 0 disables the cap.
    #[arg(long = "reasoner-timeout-secs", value_name = "SECS")]
    pub reasoner_timeout_secs: Option<u64>,

    /// Compile and check without writing the artifact.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
