use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, debug_span, info};

use crate::analysis::analyze_file;
use crate::analyzers::symbols::load_snapshot;
use crate::cli::OutputFormat;
use crate::config::{self, ComplexLintConfig};
use crate::core::ComplexityReport;
use crate::errors::Error;
use crate::io;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub context_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Run the analysis and print the reports. Nothing is printed unless
/// every input step succeeded.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = match &config.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    let reports = analyze_path(&config.path, config.context_dir.as_deref(), &settings)?;
    info!(functions = reports.len(), "Analysis complete");

    io::output::create_writer(config.format).write_reports(&reports)
}

/// Read, parse and analyze one source file.
pub fn analyze_path(
    path: &Path,
    context_dir: Option<&Path>,
    settings: &ComplexLintConfig,
) -> crate::errors::Result<Vec<ComplexityReport>> {
    let _span = debug_span!("analyze_path", path = %path.display()).entered();

    let source = io::read_file(path)?;
    let file = syn::parse_file(&source).map_err(|e| Error::parse(path, &e))?;
    debug!(items = file.items.len(), bytes = source.len(), "Parsed file");

    let context_dir = context_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| enclosing_dir(path));
    let snapshot = load_snapshot(&context_dir, path, &file)?;

    Ok(analyze_file(&file, &snapshot, &settings.weights()))
}

fn enclosing_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
