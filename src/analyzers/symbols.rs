//! Symbol snapshot used for type resolution
//!
//! The snapshot holds every type-level name declared in the analyzed file
//! and its sibling modules: nominal definitions (`struct`, `enum`, ...),
//! `use` imports and `type` aliases. It is built once before analysis and
//! only read afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use syn::visit::Visit;
use syn::{Fields, UseTree};
use tracing::{debug, debug_span};
use walkdir::WalkDir;

use crate::errors::{Error, Result};

/// A nominal type declared somewhere in the snapshot.
#[derive(Debug, Clone)]
pub enum Definition {
    /// Field names paired with their declared types, in declaration order.
    /// Tuple-struct fields are named by position.
    Struct { fields: Vec<(String, syn::Type)> },
    Enum,
    Union,
    Trait,
}

/// Entries of the built-in type universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Bool,
    Integer,
    Str,
    /// Collection taking its element as the first type argument
    SequenceOf,
    /// Owning pointer taking its target as the first type argument
    ReferenceTo,
    /// Known primitive with no state-space policy (floats)
    Unsupported,
}

/// Look a name up in the primitive types and the std prelude-like
/// wrappers the resolver understands.
pub fn lookup_universe(name: &str) -> Option<Builtin> {
    let builtin = match name {
        "bool" => Builtin::Bool,
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" | "char" => Builtin::Integer,
        "str" | "String" | "OsStr" | "OsString" | "Path" | "PathBuf" | "CStr" | "CString" => {
            Builtin::Str
        }
        "Vec" | "VecDeque" | "LinkedList" | "HashSet" | "BTreeSet" | "BinaryHeap" => {
            Builtin::SequenceOf
        }
        "Box" | "Rc" | "Arc" => Builtin::ReferenceTo,
        "f32" | "f64" => Builtin::Unsupported,
        _ => return None,
    };
    Some(builtin)
}

#[derive(Debug, Clone, Default)]
pub struct SymbolSnapshot {
    definitions: HashMap<String, Definition>,
    imports: HashMap<String, String>,
    aliases: HashMap<String, syn::Type>,
}

impl SymbolSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(file: &syn::File) -> Self {
        let mut snapshot = Self::new();
        snapshot.extend_from_file(file);
        snapshot
    }

    /// Register every declaration of `file`. Later registrations of the
    /// same name replace earlier ones.
    pub fn extend_from_file(&mut self, file: &syn::File) {
        let mut collector = DeclarationCollector { snapshot: self };
        collector.visit_file(file);
    }

    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Identifier of the item a `use` declaration binds to `name`.
    pub fn use_site(&self, name: &str) -> Option<&str> {
        self.imports.get(name).map(String::as_str)
    }

    pub fn alias(&self, name: &str) -> Option<&syn::Type> {
        self.aliases.get(name)
    }

    pub fn universe(&self, name: &str) -> Option<Builtin> {
        lookup_universe(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len() + self.imports.len() + self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct DeclarationCollector<'s> {
    snapshot: &'s mut SymbolSnapshot,
}

impl DeclarationCollector<'_> {
    fn register_use_tree(&mut self, tree: &UseTree, parent: Option<&syn::Ident>) {
        match tree {
            UseTree::Path(path) => self.register_use_tree(&path.tree, Some(&path.ident)),
            UseTree::Name(name) => {
                if let Some(target) = import_target(&name.ident, parent) {
                    self.snapshot
                        .imports
                        .insert(target.to_string(), target.to_string());
                }
            }
            UseTree::Rename(rename) => {
                if rename.rename == "_" {
                    return;
                }
                if let Some(target) = import_target(&rename.ident, parent) {
                    self.snapshot
                        .imports
                        .insert(rename.rename.to_string(), target.to_string());
                }
            }
            UseTree::Group(group) => {
                for item in &group.items {
                    self.register_use_tree(item, parent);
                }
            }
            UseTree::Glob(_) => {}
        }
    }
}

/// `use a::b::{self}` imports `b`; everything else imports its own ident.
fn import_target<'a>(
    ident: &'a syn::Ident,
    parent: Option<&'a syn::Ident>,
) -> Option<&'a syn::Ident> {
    if ident == "self" {
        parent
    } else {
        Some(ident)
    }
}

fn struct_fields(fields: &Fields) -> Vec<(String, syn::Type)> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let name = field
                .ident
                .as_ref()
                .map(|ident| ident.to_string())
                .unwrap_or_else(|| index.to_string());
            (name, field.ty.clone())
        })
        .collect()
}

impl<'ast> Visit<'ast> for DeclarationCollector<'_> {
    fn visit_item_struct(&mut self, item: &'ast syn::ItemStruct) {
        let fields = struct_fields(&item.fields);
        self.snapshot
            .definitions
            .insert(item.ident.to_string(), Definition::Struct { fields });
        syn::visit::visit_item_struct(self, item);
    }

    fn visit_item_enum(&mut self, item: &'ast syn::ItemEnum) {
        self.snapshot
            .definitions
            .insert(item.ident.to_string(), Definition::Enum);
        syn::visit::visit_item_enum(self, item);
    }

    fn visit_item_union(&mut self, item: &'ast syn::ItemUnion) {
        self.snapshot
            .definitions
            .insert(item.ident.to_string(), Definition::Union);
        syn::visit::visit_item_union(self, item);
    }

    fn visit_item_trait(&mut self, item: &'ast syn::ItemTrait) {
        self.snapshot
            .definitions
            .insert(item.ident.to_string(), Definition::Trait);
        syn::visit::visit_item_trait(self, item);
    }

    fn visit_item_type(&mut self, item: &'ast syn::ItemType) {
        self.snapshot
            .aliases
            .insert(item.ident.to_string(), (*item.ty).clone());
        syn::visit::visit_item_type(self, item);
    }

    fn visit_item_use(&mut self, item: &'ast syn::ItemUse) {
        self.register_use_tree(&item.tree, None);
    }
}

/// Build the snapshot for `file` from the `.rs` files of `context_dir`.
///
/// Sibling files are registered first (in file-name order) and the
/// analyzed file last, so its own declarations take precedence.
pub fn load_snapshot(
    context_dir: &Path,
    analyzed_path: &Path,
    file: &syn::File,
) -> Result<SymbolSnapshot> {
    let _span = debug_span!("load_snapshot", dir = %context_dir.display()).entered();

    let analyzed = fs::canonicalize(analyzed_path).ok();
    let mut snapshot = SymbolSnapshot::new();
    let mut sibling_count = 0usize;

    for entry in WalkDir::new(context_dir)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::snapshot_load(context_dir, e.to_string()))?;
        let path = entry.path();

        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        if analyzed.is_some() && fs::canonicalize(path).ok() == analyzed {
            continue;
        }

        let content =
            fs::read_to_string(path).map_err(|e| Error::snapshot_load(path, e.to_string()))?;
        let sibling = syn::parse_file(&content).map_err(|e| {
            let start = e.span().start();
            Error::snapshot_load(
                path,
                format!("{}:{}: {}", start.line, start.column + 1, e),
            )
        })?;

        snapshot.extend_from_file(&sibling);
        sibling_count += 1;
    }

    snapshot.extend_from_file(file);
    debug!(
        siblings = sibling_count,
        symbols = snapshot.len(),
        "Loaded symbol snapshot"
    );
    Ok(snapshot)
}
