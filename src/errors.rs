//! Error types for complex-lint
//!
//! Every variant here is fatal to a run. A type that fails to resolve is
//! not an error: it degrades to `ResolvedType::Unknown` and is tallied in
//! `ResolutionDiagnostics`.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Source file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source text is not valid Rust
    #[error("Parse error in {}:{line}:{column}: {message}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Symbol snapshot for the enclosing directory could not be built
    #[error("Failed to load symbol snapshot from {}: {message}", path.display())]
    SnapshotLoad { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a parse error positioned at the span `syn` reported.
    pub fn parse(file: &Path, error: &syn::Error) -> Self {
        let start = error.span().start();
        Self::Parse {
            file: file.to_path_buf(),
            line: start.line,
            column: start.column + 1,
            message: error.to_string(),
        }
    }

    pub fn snapshot_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SnapshotLoad {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
