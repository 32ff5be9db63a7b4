//! Command line argument parsing for the retok CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// retok - retokenize CJK text line by line
#[derive(Parser, Debug, Clone)]
#[command(name = "retok")]
#[command(about = "Retokenize Chinese, Japanese and Korean text into space-separated tokens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RetokArgs {
    /// Language identifier (zh, ja, jp, ko, kr, optionally with a `_g` suffix)
    #[arg(short, long, default_value = "ja", env = "RETOK_LANG")]
    pub lang: String,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Morphological dictionary for Korean (JSON word → analyses)
    #[arg(short, long, value_name = "MORPH_FILE")]
    pub morph: Option<PathBuf>,

    /// Suffix display (keep, join, hide); overrides config and environment
    #[arg(long, value_name = "MODE")]
    pub suffix_display: Option<String>,

    /// Append the token type to every term (`term|<LABEL>`)
    #[arg(short = 't', long)]
    pub with_type: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "text")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file; reads standard input when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

impl RetokArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Output format of the tokenized lines.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One space-joined line per input line
    Text,
    /// One JSON document per input line, listing its tokens
    Json,
    /// One line per input line listing `term(start-end=len)|<LABEL>` entries
    Debug,
}
