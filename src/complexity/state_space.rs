//! State-space estimation
//!
//! Assigns every [`ResolvedType`] a coarse cardinality used to rank
//! functions by the size of their input and output domains. Results are
//! always at least 1 so they compose multiplicatively; products saturate
//! at `u64::MAX`.

use crate::config::StateSpaceWeights;
use crate::core::ResolvedType;

pub fn state_space(ty: &ResolvedType, weights: &StateSpaceWeights) -> u64 {
    match ty {
        ResolvedType::Bool => weights.boolean.max(1),
        ResolvedType::IntegerLike => weights.integer.max(1),
        ResolvedType::StringLike => weights.string.max(1),
        ResolvedType::Sequence(elem) => {
            state_space(elem, weights).saturating_mul(weights.sequence_length.max(1))
        }
        ResolvedType::Reference(base) => state_space(base, weights),
        ResolvedType::Aggregate(fields) => {
            product(fields.iter().map(|field| state_space(&field.ty, weights)))
        }
        ResolvedType::Unknown => 1,
    }
}

/// Saturating product; the empty product is 1.
pub fn product(values: impl IntoIterator<Item = u64>) -> u64 {
    values
        .into_iter()
        .fold(1u64, |acc, value| acc.saturating_mul(value))
}
