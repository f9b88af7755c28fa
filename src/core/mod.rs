pub mod types;

use serde::Serialize;

pub use types::{Field, ResolvedType};

/// A function selected for analysis, borrowed from the parsed file.
#[derive(Debug, Clone)]
pub struct FunctionDeclaration<'ast> {
    /// `name` for free functions, `Type::name` for methods
    pub name: String,
    pub params: Vec<&'ast syn::Type>,
    pub results: Vec<&'ast syn::Type>,
    pub body: &'ast syn::Block,
    /// Self type of the enclosing `impl` block, if any
    pub self_ty: Option<&'ast syn::Type>,
}

/// Counters for resolution failures that were absorbed instead of reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionDiagnostics {
    /// Identifiers found nowhere in the snapshot or the universe
    pub unresolved: u32,
    /// Aggregate fields dropped because their type did not resolve
    pub skipped_fields: u32,
    /// Re-entries into a declaration that was already being expanded
    pub cyclic: u32,
}

impl ResolutionDiagnostics {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityReport {
    pub name: String,
    pub input_state_space: u64,
    pub output_state_space: u64,
    pub branching_factor: u32,
    pub operational_complexity: u32,
    pub local_assignment_count: u32,
    #[serde(skip_serializing_if = "ResolutionDiagnostics::is_clean")]
    pub diagnostics: ResolutionDiagnostics,
}
