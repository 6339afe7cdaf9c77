//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - faltex has a single action, so there are no subcommands
//! - `--output` wins over `output.dir` from `--config`

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// faltex - generate a XeLaTeX/LuaLaTeX package from the latest Font Awesome release
#[derive(Parser, Debug)]
#[command(name = "faltex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output directory [default: ./fontawesome7-latex-latest]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI (NDJSON events on stdout)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
