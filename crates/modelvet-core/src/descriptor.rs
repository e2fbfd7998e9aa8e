//! Erased descriptors for registered types.
//!
//! A [`ModelDescriptor`] or [`EnumDescriptor`] is what discovery hands to the
//! checkers: the typed registration surface lives in [`crate::binding`], and
//! erasure happens behind small object-safe traits so descriptors stay
//! cheaply clonable and thread-safe.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::types::TypeKind;

/// Metadata for one registered property of a model.
///
/// The two samples must be distinct: the checkers use `sample_a` for
/// round-trips and population, and `sample_b` to probe that equality and the
/// string representation actually react to the property.
#[derive(Debug, Clone)]
pub struct PropertyMeta {
    pub name: String,
    pub sample_a: Value,
    pub sample_b: Value,
    /// Equality is allowed to ignore this property.
    pub equality_exempt: bool,
}

/// Erased operations over one live model instance.
pub(crate) trait InstanceOps: Send {
    fn duplicate(&self) -> Box<dyn InstanceOps>;
    fn get(&self, property: usize) -> Value;
    fn set(&mut self, property: usize, value: &Value);
    fn model_eq(&self, other: &dyn InstanceOps) -> bool;
    fn hash64(&self) -> u64;
    fn debug_string(&self) -> String;
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Erased constructor for a registered model.
pub(crate) trait ModelOps: Send + Sync {
    fn construct(&self) -> Box<dyn InstanceOps>;
}

/// Erased accessor dispatch for a registered enumeration.
pub(crate) trait EnumOps: Send + Sync {
    fn invoke(&self, constant: usize, accessor: usize) -> Option<Value>;
}

/// A synthesized instance of a registered model.
///
/// Properties are addressed by index into the owning descriptor's
/// [`ModelDescriptor::properties`] slice.
pub struct ModelInstance {
    inner: Box<dyn InstanceOps>,
}

impl ModelInstance {
    pub fn duplicate(&self) -> ModelInstance {
        ModelInstance {
            inner: self.inner.duplicate(),
        }
    }

    /// Read a property back through its registered getter.
    pub fn get(&self, property: usize) -> Value {
        self.inner.get(property)
    }

    /// Write a property through its registered setter.
    pub fn set(&mut self, property: usize, value: &Value) {
        self.inner.set(property, value);
    }

    /// Compare via the model's own `PartialEq`. Instances of different
    /// registered types are never equal.
    pub fn model_eq(&self, other: &ModelInstance) -> bool {
        self.inner.model_eq(&*other.inner)
    }

    /// Hash via the model's own `Hash` implementation.
    pub fn hash64(&self) -> u64 {
        self.inner.hash64()
    }

    /// The model's `Debug` rendering.
    pub fn debug_string(&self) -> String {
        self.inner.debug_string()
    }
}

impl fmt::Debug for ModelInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.debug_string())
    }
}

/// Erased description of a registered data class.
#[derive(Clone)]
pub struct ModelDescriptor {
    name: String,
    namespace: String,
    properties: Arc<Vec<PropertyMeta>>,
    ops: Option<Arc<dyn ModelOps>>,
}

impl ModelDescriptor {
    pub(crate) fn new(
        namespace: &str,
        name: &str,
        properties: Vec<PropertyMeta>,
        ops: Arc<dyn ModelOps>,
    ) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            properties: Arc::new(properties),
            ops: Some(ops),
        }
    }

    /// A descriptor for a type that cannot be instantiated. It participates
    /// in discovery and exclusion accounting but every checker skips it.
    pub(crate) fn new_abstract(namespace: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            properties: Arc::new(Vec::new()),
            ops: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully-qualified identity, `namespace.Name`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    pub fn is_abstract(&self) -> bool {
        self.ops.is_none()
    }

    pub fn properties(&self) -> &[PropertyMeta] {
        &self.properties
    }

    /// Construct a fresh instance, or `None` for abstract descriptors.
    /// A panicking registered constructor propagates to the caller.
    pub fn construct(&self) -> Option<ModelInstance> {
        let ops = self.ops.as_ref()?;
        Some(ModelInstance {
            inner: ops.construct(),
        })
    }

    pub fn kind(&self) -> TypeKind {
        TypeKind::Model
    }
}

impl fmt::Debug for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelDescriptor")
            .field("qualified_name", &self.qualified_name())
            .field("is_abstract", &self.is_abstract())
            .field(
                "properties",
                &self.properties.iter().map(|p| &p.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Erased description of a registered enumeration.
#[derive(Clone)]
pub struct EnumDescriptor {
    name: String,
    namespace: String,
    constants: Vec<String>,
    accessors: Vec<String>,
    ops: Arc<dyn EnumOps>,
}

impl EnumDescriptor {
    pub(crate) fn new(
        namespace: &str,
        name: &str,
        constants: Vec<String>,
        accessors: Vec<String>,
        ops: Arc<dyn EnumOps>,
    ) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            constants,
            accessors,
            ops,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully-qualified identity, `namespace.Name`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Declared constant names, in registration order.
    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    /// Declared accessor names, in registration order.
    pub fn accessors(&self) -> &[String] {
        &self.accessors
    }

    /// Invoke one accessor on one constant. `None` means the accessor
    /// reported an absent value. A panicking accessor propagates.
    pub fn invoke(&self, constant: usize, accessor: usize) -> Option<Value> {
        self.ops.invoke(constant, accessor)
    }

    pub fn kind(&self) -> TypeKind {
        TypeKind::Enumeration
    }
}

impl fmt::Debug for EnumDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDescriptor")
            .field("qualified_name", &self.qualified_name())
            .field("constants", &self.constants)
            .field("accessors", &self.accessors)
            .finish()
    }
}
