//! Typed registration builders.
//!
//! Test authors describe each model as an explicit list of
//! (property, getter, setter, sample values) tuples and each enumeration as
//! its constants plus accessor closures. The builders erase those typed
//! closures into [`crate::descriptor`] handles, so no name-based heuristics
//! are needed anywhere downstream.

use std::any::Any;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use serde_json::Value;

use crate::descriptor::{
    EnumDescriptor, EnumOps, InstanceOps, ModelDescriptor, ModelOps, PropertyMeta,
};

type Constructor<T> = Box<dyn Fn() -> T + Send + Sync>;
type Getter<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;
type Setter<T> = Box<dyn Fn(&mut T, &Value) + Send + Sync>;
type EnumAccessor<T> = Box<dyn Fn(&T) -> Option<Value> + Send + Sync>;

struct TypedProperty<T> {
    get: Getter<T>,
    set: Setter<T>,
}

/// Builder for registering a data class.
///
/// The constructor must produce a valid baseline instance; every property
/// needs a getter, a setter, and two distinct sample values.
pub struct ModelBinding<T> {
    name: String,
    constructor: Constructor<T>,
    properties: Vec<TypedProperty<T>>,
    metas: Vec<PropertyMeta>,
}

impl<T> ModelBinding<T>
where
    T: Clone + PartialEq + Hash + fmt::Debug + Send + Sync + 'static,
{
    pub fn new(name: &str, constructor: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            name: name.to_string(),
            constructor: Box::new(constructor),
            properties: Vec::new(),
            metas: Vec::new(),
        }
    }

    /// Register a property that participates in equality.
    pub fn property(
        self,
        name: &str,
        get: impl Fn(&T) -> Value + Send + Sync + 'static,
        set: impl Fn(&mut T, &Value) + Send + Sync + 'static,
        sample_a: Value,
        sample_b: Value,
    ) -> Self {
        self.push_property(name, get, set, sample_a, sample_b, false)
    }

    /// Register a property that equality is allowed to ignore
    /// (e.g. a cached or derived field).
    pub fn property_exempt(
        self,
        name: &str,
        get: impl Fn(&T) -> Value + Send + Sync + 'static,
        set: impl Fn(&mut T, &Value) + Send + Sync + 'static,
        sample_a: Value,
        sample_b: Value,
    ) -> Self {
        self.push_property(name, get, set, sample_a, sample_b, true)
    }

    fn push_property(
        mut self,
        name: &str,
        get: impl Fn(&T) -> Value + Send + Sync + 'static,
        set: impl Fn(&mut T, &Value) + Send + Sync + 'static,
        sample_a: Value,
        sample_b: Value,
        equality_exempt: bool,
    ) -> Self {
        debug_assert!(
            sample_a != sample_b,
            "property `{}` needs two distinct sample values",
            name
        );
        self.properties.push(TypedProperty {
            get: Box::new(get),
            set: Box::new(set),
        });
        self.metas.push(PropertyMeta {
            name: name.to_string(),
            sample_a,
            sample_b,
            equality_exempt,
        });
        self
    }

    pub(crate) fn erase(self, namespace: &str) -> ModelDescriptor {
        let ops = TypedModel {
            constructor: self.constructor,
            properties: Arc::new(self.properties),
        };
        ModelDescriptor::new(namespace, &self.name, self.metas, Arc::new(ops))
    }
}

struct TypedModel<T> {
    constructor: Constructor<T>,
    properties: Arc<Vec<TypedProperty<T>>>,
}

impl<T> ModelOps for TypedModel<T>
where
    T: Clone + PartialEq + Hash + fmt::Debug + Send + Sync + 'static,
{
    fn construct(&self) -> Box<dyn InstanceOps> {
        Box::new(TypedInstance {
            value: (self.constructor)(),
            properties: Arc::clone(&self.properties),
        })
    }
}

struct TypedInstance<T> {
    value: T,
    properties: Arc<Vec<TypedProperty<T>>>,
}

impl<T> InstanceOps for TypedInstance<T>
where
    T: Clone + PartialEq + Hash + fmt::Debug + Send + Sync + 'static,
{
    fn duplicate(&self) -> Box<dyn InstanceOps> {
        Box::new(TypedInstance {
            value: self.value.clone(),
            properties: Arc::clone(&self.properties),
        })
    }

    fn get(&self, property: usize) -> Value {
        (self.properties[property].get)(&self.value)
    }

    fn set(&mut self, property: usize, value: &Value) {
        (self.properties[property].set)(&mut self.value, value);
    }

    fn model_eq(&self, other: &dyn InstanceOps) -> bool {
        match other.as_any().downcast_ref::<TypedInstance<T>>() {
            Some(other) => self.value == other.value,
            None => false,
        }
    }

    fn hash64(&self) -> u64 {
        crate::hash::hash64_of(&self.value)
    }

    fn debug_string(&self) -> String {
        format!("{:?}", self.value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builder for registering an enumeration: its constants and the accessors
/// to probe on every constant.
pub struct EnumBinding<T> {
    name: String,
    constants: Vec<(String, T)>,
    accessors: Vec<(String, EnumAccessor<T>)>,
}

impl<T> EnumBinding<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            constants: Vec::new(),
            accessors: Vec::new(),
        }
    }

    pub fn constant(mut self, name: &str, value: T) -> Self {
        self.constants.push((name.to_string(), value));
        self
    }

    /// Register an accessor. Returning `None` means "absent", which the
    /// enum checker reports as a violation for the offending constant.
    pub fn accessor(
        mut self,
        name: &str,
        invoke: impl Fn(&T) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.accessors.push((name.to_string(), Box::new(invoke)));
        self
    }

    pub(crate) fn erase(self, namespace: &str) -> EnumDescriptor {
        let (constant_names, constants): (Vec<_>, Vec<_>) = self.constants.into_iter().unzip();
        let (accessor_names, accessors): (Vec<_>, Vec<_>) = self.accessors.into_iter().unzip();
        let ops = TypedEnum {
            constants,
            accessors,
        };
        EnumDescriptor::new(
            namespace,
            &self.name,
            constant_names,
            accessor_names,
            Arc::new(ops),
        )
    }
}

struct TypedEnum<T> {
    constants: Vec<T>,
    accessors: Vec<EnumAccessor<T>>,
}

impl<T> EnumOps for TypedEnum<T>
where
    T: Send + Sync + 'static,
{
    fn invoke(&self, constant: usize, accessor: usize) -> Option<Value> {
        (self.accessors[accessor])(&self.constants[constant])
    }
}
