//! Resolved type model
//!
//! The tagged representation a syntax-level type is reduced to before
//! its state space is estimated. Values are built fresh for every
//! resolution and carry no identity.

use serde::Serialize;

/// A type after identifier resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum ResolvedType {
    Bool,
    /// Every integer width and signedness, plus `char`
    IntegerLike,
    StringLike,
    Sequence(Box<ResolvedType>),
    /// Pointers, references and owning pointer wrappers
    Reference(Box<ResolvedType>),
    Aggregate(Vec<Field>),
    /// Resolution failed or the type kind has no counterpart here
    Unknown,
}

/// A named member of an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: ResolvedType,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: ResolvedType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl ResolvedType {
    pub fn sequence(elem: ResolvedType) -> Self {
        ResolvedType::Sequence(Box::new(elem))
    }

    pub fn reference(base: ResolvedType) -> Self {
        ResolvedType::Reference(Box::new(base))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ResolvedType::Unknown)
    }

    /// Wrap `elem` in a sequence unless it failed to resolve.
    pub fn sequence_of(elem: ResolvedType) -> Self {
        if elem.is_unknown() {
            ResolvedType::Unknown
        } else {
            Self::sequence(elem)
        }
    }

    /// Wrap `base` in a reference unless it failed to resolve.
    pub fn reference_to(base: ResolvedType) -> Self {
        if base.is_unknown() {
            ResolvedType::Unknown
        } else {
            Self::reference(base)
        }
    }
}
