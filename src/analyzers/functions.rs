//! Function declaration extraction
//!
//! Collects free functions and `impl` methods from a parsed file in
//! source order. Function bodies are not searched for nested items.

use syn::visit::Visit;
use syn::{FnArg, ReturnType, Signature, Type};

use crate::core::FunctionDeclaration;

pub fn extract_functions(file: &syn::File) -> Vec<FunctionDeclaration<'_>> {
    let mut visitor = FunctionCollector::default();
    visitor.visit_file(file);
    visitor.functions
}

#[derive(Default)]
struct FunctionCollector<'ast> {
    functions: Vec<FunctionDeclaration<'ast>>,
    current_impl: Option<&'ast Type>,
}

impl<'ast> FunctionCollector<'ast> {
    fn push(&mut self, name: String, sig: &'ast Signature, body: &'ast syn::Block) {
        self.functions.push(FunctionDeclaration {
            name,
            params: parameter_types(sig),
            results: result_types(&sig.output),
            body,
            self_ty: self.current_impl,
        });
    }
}

/// Declared types of the typed arguments; the receiver is excluded.
fn parameter_types(sig: &Signature) -> Vec<&Type> {
    sig.inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Typed(pat_type) => Some(pat_type.ty.as_ref()),
            FnArg::Receiver(_) => None,
        })
        .collect()
}

/// A tuple return type contributes its elements, `()` contributes nothing.
fn result_types(output: &ReturnType) -> Vec<&Type> {
    match output {
        ReturnType::Default => Vec::new(),
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Tuple(tuple) => tuple.elems.iter().collect(),
            other => vec![other],
        },
    }
}

fn impl_type_name(self_ty: &Type) -> Option<String> {
    match self_ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident.to_string()),
        _ => None,
    }
}

impl<'ast> Visit<'ast> for FunctionCollector<'ast> {
    fn visit_item_fn(&mut self, item_fn: &'ast syn::ItemFn) {
        self.push(item_fn.sig.ident.to_string(), &item_fn.sig, &item_fn.block);
    }

    fn visit_item_impl(&mut self, item_impl: &'ast syn::ItemImpl) {
        let prev_impl = self.current_impl.replace(item_impl.self_ty.as_ref());
        let impl_name = impl_type_name(&item_impl.self_ty);

        for item in &item_impl.items {
            if let syn::ImplItem::Fn(method) = item {
                let method_name = method.sig.ident.to_string();
                let name = match &impl_name {
                    Some(impl_name) => format!("{impl_name}::{method_name}"),
                    None => method_name,
                };
                self.push(name, &method.sig, &method.block);
            }
        }

        self.current_impl = prev_impl;
    }

    // Trait default methods are not collected.
    fn visit_item_trait(&mut self, _item_trait: &'ast syn::ItemTrait) {}
}
