//! The type catalog: how discovery learns which types exist.
//!
//! [`TypeCatalog`] is the capability seam; [`ModelRegistry`] is the in-memory
//! implementation that test authors populate before a run.

use std::fmt;
use std::hash::Hash;

use crate::binding::{EnumBinding, ModelBinding};
use crate::descriptor::{EnumDescriptor, ModelDescriptor};
use crate::types::{CatalogError, TypeKind};

/// A discovered type: either a data class or an enumeration, never both.
#[derive(Debug, Clone)]
pub enum TypeEntry {
    Model(ModelDescriptor),
    Enumeration(EnumDescriptor),
}

impl TypeEntry {
    /// Fully-qualified identity, `namespace.Name`.
    pub fn qualified_name(&self) -> String {
        match self {
            TypeEntry::Model(m) => m.qualified_name(),
            TypeEntry::Enumeration(e) => e.qualified_name(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeEntry::Model(_) => TypeKind::Model,
            TypeEntry::Enumeration(_) => TypeKind::Enumeration,
        }
    }
}

/// Capability trait: enumerate every type registered under a namespace.
///
/// Listing is recursive: a type registered under `a.b.c` is listed for the
/// query `a.b`. Order is unspecified.
pub trait TypeCatalog {
    fn list_types(&self, namespace: &str) -> Result<Vec<TypeEntry>, CatalogError>;
}

/// In-memory registry populated by test authors before a run starts.
#[derive(Default)]
pub struct ModelRegistry {
    models: Vec<ModelDescriptor>,
    enums: Vec<EnumDescriptor>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_model<T>(&mut self, namespace: &str, binding: ModelBinding<T>)
    where
        T: Clone + PartialEq + Hash + fmt::Debug + Send + Sync + 'static,
    {
        self.models.push(binding.erase(namespace));
    }

    pub fn register_enum<T>(&mut self, namespace: &str, binding: EnumBinding<T>)
    where
        T: Send + Sync + 'static,
    {
        self.enums.push(binding.erase(namespace));
    }

    /// Register a type that cannot be instantiated. It is discovered and
    /// counted but skipped by every checker.
    pub fn register_abstract(&mut self, namespace: &str, name: &str) {
        self.models.push(ModelDescriptor::new_abstract(namespace, name));
    }

    pub fn len(&self) -> usize {
        self.models.len() + self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.enums.is_empty()
    }
}

/// True when `registered` equals `query` or sits below it in the dotted
/// hierarchy (`a.b` matches `a.b.c` but not `a.bc`).
fn namespace_matches(registered: &str, query: &str) -> bool {
    match registered.strip_prefix(query) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}

impl TypeCatalog for ModelRegistry {
    fn list_types(&self, namespace: &str) -> Result<Vec<TypeEntry>, CatalogError> {
        if namespace.is_empty() {
            return Err(CatalogError::EmptyNamespace);
        }

        let entries: Vec<TypeEntry> = self
            .models
            .iter()
            .filter(|m| namespace_matches(m.namespace(), namespace))
            .cloned()
            .map(TypeEntry::Model)
            .chain(
                self.enums
                    .iter()
                    .filter(|e| namespace_matches(e.namespace(), namespace))
                    .cloned()
                    .map(TypeEntry::Enumeration),
            )
            .collect();

        if entries.is_empty() {
            return Err(CatalogError::UnknownNamespace(namespace.to_string()));
        }
        Ok(entries)
    }
}
