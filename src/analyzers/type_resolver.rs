//! Type expression resolution
//!
//! Maps a `syn::Type` to a [`ResolvedType`] against a read-only
//! [`SymbolSnapshot`]. Resolution never fails: anything that cannot be
//! mapped becomes `ResolvedType::Unknown`, and the reason is tallied in
//! [`ResolutionDiagnostics`].
//!
//! Identifiers are tried in order against:
//! 1. nominal definitions (`struct`, `enum`, ...)
//! 2. `use` imports, following renames
//! 3. `type` aliases
//! 4. the built-in universe
//!
//! Named declarations are expanded under a guard, so self-referential or
//! mutually recursive types resolve to `Unknown` on re-entry instead of
//! recursing forever.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};
use tracing::debug;

use super::symbols::{Builtin, Definition, SymbolSnapshot};
use crate::core::{Field, ResolutionDiagnostics, ResolvedType};

pub struct TypeResolver<'a> {
    snapshot: &'a SymbolSnapshot,
    self_ty: Option<&'a Type>,
    /// Declarations currently being expanded, innermost last
    expanding: Vec<String>,
    /// Structs whose fields are being resolved, for `Self` inside them
    self_names: Vec<String>,
    diagnostics: ResolutionDiagnostics,
}

impl<'a> TypeResolver<'a> {
    pub fn new(snapshot: &'a SymbolSnapshot) -> Self {
        Self {
            snapshot,
            self_ty: None,
            expanding: Vec::new(),
            self_names: Vec::new(),
            diagnostics: ResolutionDiagnostics::default(),
        }
    }

    /// Resolve `Self` to the given type, normally an `impl` block's self type.
    pub fn with_self_type(mut self, self_ty: Option<&'a Type>) -> Self {
        self.self_ty = self_ty;
        self
    }

    pub fn diagnostics(&self) -> ResolutionDiagnostics {
        self.diagnostics
    }

    pub fn resolve(&mut self, ty: &Type) -> ResolvedType {
        match ty {
            Type::Path(type_path) if type_path.qself.is_none() => {
                match type_path.path.segments.last() {
                    Some(segment) => {
                        let name = segment.ident.to_string();
                        self.resolve_named(&name, &segment.arguments)
                    }
                    None => ResolvedType::Unknown,
                }
            }
            Type::Slice(slice) => ResolvedType::sequence_of(self.resolve(&slice.elem)),
            Type::Array(array) => ResolvedType::sequence_of(self.resolve(&array.elem)),
            Type::Reference(reference) => ResolvedType::reference_to(self.resolve(&reference.elem)),
            Type::Ptr(pointer) => ResolvedType::reference_to(self.resolve(&pointer.elem)),
            Type::Tuple(tuple) => {
                let elems = tuple
                    .elems
                    .iter()
                    .enumerate()
                    .map(|(index, elem)| (index.to_string(), elem));
                self.resolve_fields(elems)
            }
            Type::Paren(paren) => self.resolve(&paren.elem),
            Type::Group(group) => self.resolve(&group.elem),
            other => {
                debug!(ty = %other.to_token_stream(), "Type form has no resolution");
                ResolvedType::Unknown
            }
        }
    }

    fn resolve_named(&mut self, name: &str, arguments: &PathArguments) -> ResolvedType {
        let snapshot = self.snapshot;

        if name == "Self" {
            if let Some(enclosing) = self.self_names.last().cloned() {
                return self.resolve_named(&enclosing, &PathArguments::None);
            }
            if let Some(self_ty) = self.self_ty {
                return self.guarded("Self".to_string(), |resolver| resolver.resolve(self_ty));
            }
        }

        if let Some(definition) = snapshot.definition(name) {
            return self.resolve_definition(name, definition);
        }

        if let Some(target) = snapshot.use_site(name) {
            if target != name {
                return self.guarded(format!("use {name}"), |resolver| {
                    resolver.resolve_named(target, arguments)
                });
            }
        }

        if let Some(aliased) = snapshot.alias(name) {
            return self.guarded(format!("type {name}"), |resolver| resolver.resolve(aliased));
        }

        if let Some(builtin) = snapshot.universe(name) {
            return self.resolve_builtin(name, builtin, arguments);
        }

        self.diagnostics.unresolved += 1;
        debug!(name, "Unresolved type identifier");
        ResolvedType::Unknown
    }

    fn resolve_definition(&mut self, name: &str, definition: &'a Definition) -> ResolvedType {
        match definition {
            Definition::Struct { fields } => self.guarded(format!("struct {name}"), |resolver| {
                resolver.self_names.push(name.to_string());
                let aggregate =
                    resolver.resolve_fields(fields.iter().map(|(field, ty)| (field.clone(), ty)));
                resolver.self_names.pop();
                aggregate
            }),
            Definition::Enum | Definition::Union | Definition::Trait => {
                debug!(name, "Declared type has no state-space representation");
                ResolvedType::Unknown
            }
        }
    }

    fn resolve_builtin(
        &mut self,
        name: &str,
        builtin: Builtin,
        arguments: &PathArguments,
    ) -> ResolvedType {
        match builtin {
            Builtin::Bool => ResolvedType::Bool,
            Builtin::Integer => ResolvedType::IntegerLike,
            Builtin::Str => ResolvedType::StringLike,
            Builtin::SequenceOf => {
                let elem = self.resolve_type_argument(name, arguments);
                ResolvedType::sequence_of(elem)
            }
            Builtin::ReferenceTo => {
                let base = self.resolve_type_argument(name, arguments);
                ResolvedType::reference_to(base)
            }
            Builtin::Unsupported => {
                debug!(name, "Built-in type has no state-space policy");
                ResolvedType::Unknown
            }
        }
    }

    fn resolve_type_argument(&mut self, name: &str, arguments: &PathArguments) -> ResolvedType {
        match first_type_argument(arguments) {
            Some(argument) => self.resolve(argument),
            None => {
                debug!(name, "Wrapper type used without a type argument");
                ResolvedType::Unknown
            }
        }
    }

    /// Resolve aggregate members. Members that do not resolve are dropped
    /// and counted, never reported as errors.
    fn resolve_fields<'t>(
        &mut self,
        members: impl Iterator<Item = (String, &'t Type)>,
    ) -> ResolvedType {
        let mut fields = Vec::new();
        for (name, ty) in members {
            match self.resolve(ty) {
                ResolvedType::Unknown => {
                    self.diagnostics.skipped_fields += 1;
                    debug!(field = %name, ty = %ty.to_token_stream(), "Skipping unresolved field");
                }
                resolved => fields.push(Field::new(name, resolved)),
            }
        }
        ResolvedType::Aggregate(fields)
    }

    fn guarded(
        &mut self,
        key: String,
        expand: impl FnOnce(&mut Self) -> ResolvedType,
    ) -> ResolvedType {
        if self.expanding.contains(&key) {
            self.diagnostics.cyclic += 1;
            debug!(declaration = %key, "Cyclic type reference");
            return ResolvedType::Unknown;
        }

        self.expanding.push(key);
        let resolved = expand(self);
        self.expanding.pop();
        resolved
    }
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    match arguments {
        PathArguments::AngleBracketed(bracketed) => {
            bracketed.args.iter().find_map(|argument| match argument {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
        }
        _ => None,
    }
}
