//! Per-function analysis
//!
//! Composes type resolution, state-space estimation and the structural
//! counters into one [`ComplexityReport`] per function, in declaration
//! order. Reports are independent of each other; the symbol snapshot is
//! only ever read.

use quote::ToTokens;
use tracing::{debug, debug_span};

use crate::analyzers::functions::extract_functions;
use crate::analyzers::symbols::SymbolSnapshot;
use crate::analyzers::type_resolver::TypeResolver;
use crate::complexity::state_space::{product, state_space};
use crate::complexity::structural::StructuralMetrics;
use crate::config::StateSpaceWeights;
use crate::core::{ComplexityReport, FunctionDeclaration};

pub fn analyze_file(
    file: &syn::File,
    snapshot: &SymbolSnapshot,
    weights: &StateSpaceWeights,
) -> Vec<ComplexityReport> {
    extract_functions(file)
        .iter()
        .map(|function| analyze_function(function, snapshot, weights))
        .collect()
}

pub fn analyze_function(
    function: &FunctionDeclaration<'_>,
    snapshot: &SymbolSnapshot,
    weights: &StateSpaceWeights,
) -> ComplexityReport {
    let _span = debug_span!("analyze_function", name = %function.name).entered();

    let mut resolver = TypeResolver::new(snapshot).with_self_type(function.self_ty);
    let mut space_of = |types: &[&syn::Type]| {
        product(types.iter().map(|ty| {
            let resolved = resolver.resolve(ty);
            let space = state_space(&resolved, weights);
            debug!(ty = %ty.to_token_stream(), space, "Estimated state space");
            space
        }))
    };

    let input_state_space = space_of(function.params.as_slice());
    let output_state_space = space_of(function.results.as_slice());
    let metrics = StructuralMetrics::from_block(function.body);

    let diagnostics = resolver.diagnostics();
    if !diagnostics.is_clean() {
        debug!(
            unresolved = diagnostics.unresolved,
            skipped_fields = diagnostics.skipped_fields,
            cyclic = diagnostics.cyclic,
            "Type resolution degraded"
        );
    }

    ComplexityReport {
        name: function.name.clone(),
        input_state_space,
        output_state_space,
        branching_factor: metrics.branching_factor,
        operational_complexity: metrics.operational_complexity,
        local_assignment_count: metrics.local_assignment_count,
        diagnostics,
    }
}
