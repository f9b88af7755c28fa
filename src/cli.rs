use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One labeled block per function
    Terminal,
    /// Pretty-printed JSON array of reports
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "complex-lint")]
#[command(
    about = "Estimate input/output state space and structural complexity of Rust functions",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Rust source file to analyze
    #[arg(short, long, default_value = "example.rs", env = "COMPLEX_LINT_PATH")]
    pub path: PathBuf,

    /// Directory whose .rs files provide type declarations
    /// (defaults to the analyzed file's directory)
    #[arg(long = "context-dir")]
    pub context_dir: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .complex-lint.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
