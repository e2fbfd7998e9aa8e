use serde::{Deserialize, Serialize};

/// Classification of a discovered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Model,
    Enumeration,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Model => "model",
            TypeKind::Enumeration => "enumeration",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while resolving a namespace.
///
/// Both variants are fatal to a validation run: no partial results are
/// produced when the namespace itself cannot be scanned.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("namespace is empty")]
    EmptyNamespace,

    #[error("no types registered under namespace `{0}`")]
    UnknownNamespace(String),
}
