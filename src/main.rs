use anyhow::Result;
use clap::Parser;
use complex_lint::cli::Cli;
use complex_lint::commands::analyze::{handle_analyze, AnalyzeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    complex_lint::observability::init_logging(cli.verbosity);

    handle_analyze(AnalyzeConfig {
        path: cli.path,
        context_dir: cli.context_dir,
        config: cli.config,
        format: cli.format,
    })
}
