//! Namespace discovery: list, filter, partition.

use std::collections::HashSet;

use modelvet_core::catalog::{TypeCatalog, TypeEntry};
use modelvet_core::descriptor::{EnumDescriptor, ModelDescriptor};
use modelvet_core::types::CatalogError;

/// Types to skip: exact fully-qualified names plus name suffixes.
///
/// Mutable while the run is being configured; discovery only reads it.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: HashSet<String>,
    suffixes: HashSet<String>,
}

impl Default for ExclusionSet {
    /// The conventional suffix exclusions: builders and test types.
    fn default() -> Self {
        let mut set = Self::empty();
        for suffix in ["Builder", "Test", "IT"] {
            set.exclude_suffix(suffix);
        }
        set
    }
}

impl ExclusionSet {
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
            suffixes: HashSet::new(),
        }
    }

    /// Exclude one type by its fully-qualified name.
    pub fn exclude_name(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    /// Exclude every type whose qualified name ends with `suffix`.
    pub fn exclude_suffix(&mut self, suffix: &str) {
        self.suffixes.insert(suffix.to_string());
    }

    pub fn is_excluded(&self, qualified_name: &str) -> bool {
        self.names.contains(qualified_name)
            || self.suffixes.iter().any(|s| qualified_name.ends_with(s))
    }
}

/// Discovery output: survivors partitioned by kind, plus the exclusion count
/// for the report summary.
#[derive(Debug)]
pub struct Discovered {
    pub enums: Vec<EnumDescriptor>,
    pub models: Vec<ModelDescriptor>,
    pub excluded: u32,
}

/// List every type under `namespace`, drop excluded ones, and partition the
/// rest into enumerations and models. Namespace resolution failures are
/// fatal; no partial results.
pub fn discover(
    catalog: &dyn TypeCatalog,
    namespace: &str,
    exclusions: &ExclusionSet,
) -> Result<Discovered, CatalogError> {
    let entries = catalog.list_types(namespace)?;

    let mut discovered = Discovered {
        enums: Vec::new(),
        models: Vec::new(),
        excluded: 0,
    };
    for entry in entries {
        if exclusions.is_excluded(&entry.qualified_name()) {
            discovered.excluded += 1;
            continue;
        }
        match entry {
            TypeEntry::Model(m) => discovered.models.push(m),
            TypeEntry::Enumeration(e) => discovered.enums.push(e),
        }
    }
    Ok(discovered)
}
