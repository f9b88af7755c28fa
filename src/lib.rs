// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    ComplexityReport, Field, FunctionDeclaration, ResolutionDiagnostics, ResolvedType,
};

pub use crate::analysis::{analyze_file, analyze_function};
pub use crate::analyzers::{
    functions::extract_functions,
    symbols::{load_snapshot, SymbolSnapshot},
    type_resolver::TypeResolver,
};
pub use crate::complexity::{state_space::state_space, structural::StructuralMetrics};
pub use crate::config::StateSpaceWeights;
pub use crate::errors::{Error, Result};
pub use crate::io::output::{create_writer, OutputWriter};
