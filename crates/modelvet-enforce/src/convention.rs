//! Convention checker: construction, accessor/mutator round-trips, and a
//! string representation that reflects field state.

use std::panic::{catch_unwind, AssertUnwindSafe};

use modelvet_core::descriptor::ModelDescriptor;

use crate::types::Violation;
use crate::util::panic_message;

/// Check E001/E002/E003 (plus wrapped E007) for one non-abstract model.
pub fn check_conventions(descriptor: &ModelDescriptor) -> Vec<Violation> {
    let mut violations = Vec::new();
    let type_name = descriptor.qualified_name();

    let baseline = match catch_unwind(AssertUnwindSafe(|| descriptor.construct())) {
        Err(payload) => {
            violations.push(Violation {
                code: "E001".to_string(),
                severity: "ERROR".to_string(),
                category: "construction_failed".to_string(),
                message: format!(
                    "Constructor of `{}` panicked: {}",
                    descriptor.name(),
                    panic_message(payload)
                ),
                type_name,
                property: None,
                constant: None,
                law: None,
                fix_hint: Some(format!(
                    "Make the registered constructor of `{}` produce a valid instance",
                    descriptor.name()
                )),
                suppressed: false,
                suppress_hint: None,
            });
            return violations;
        }
        Ok(None) => return violations, // abstract, nothing to construct
        Ok(Some(instance)) => instance,
    };

    for (index, meta) in descriptor.properties().iter().enumerate() {
        // Accessor/mutator round-trip on the first sample.
        let round_trip = catch_unwind(AssertUnwindSafe(|| {
            let mut instance = baseline.duplicate();
            instance.set(index, &meta.sample_a);
            instance.get(index)
        }));
        match round_trip {
            Err(payload) => {
                violations.push(invocation_failure(descriptor, &meta.name, payload));
                continue;
            }
            Ok(read_back) => {
                if read_back != meta.sample_a {
                    violations.push(Violation {
                        code: "E002".to_string(),
                        severity: "ERROR".to_string(),
                        category: "property_round_trip".to_string(),
                        message: format!(
                            "Property `{}` round-trip returned {} after setting {}",
                            meta.name, read_back, meta.sample_a
                        ),
                        type_name: type_name.clone(),
                        property: Some(meta.name.clone()),
                        constant: None,
                        law: None,
                        fix_hint: Some(format!(
                            "Make the getter and setter of `{}` operate on the same field",
                            meta.name
                        )),
                        suppressed: false,
                        suppress_hint: None,
                    });
                }
            }
        }

        // The Debug rendering must change when this property changes.
        let rendered = catch_unwind(AssertUnwindSafe(|| {
            let mut low = baseline.duplicate();
            let mut high = baseline.duplicate();
            low.set(index, &meta.sample_a);
            high.set(index, &meta.sample_b);
            (low.debug_string(), high.debug_string())
        }));
        match rendered {
            Err(payload) => {
                violations.push(invocation_failure(descriptor, &meta.name, payload));
            }
            Ok((low, high)) => {
                if low.is_empty() || low == high {
                    violations.push(Violation {
                        code: "E003".to_string(),
                        severity: "ERROR".to_string(),
                        category: "string_representation".to_string(),
                        message: format!(
                            "Debug output of `{}` does not reflect property `{}`",
                            descriptor.name(),
                            meta.name
                        ),
                        type_name: type_name.clone(),
                        property: Some(meta.name.clone()),
                        constant: None,
                        law: None,
                        fix_hint: Some(format!(
                            "Include `{}` in the Debug implementation",
                            meta.name
                        )),
                        suppressed: false,
                        suppress_hint: None,
                    });
                }
            }
        }
    }

    // A model with no registered properties still needs a non-empty rendering.
    if descriptor.properties().is_empty() && baseline.debug_string().is_empty() {
        violations.push(Violation {
            code: "E003".to_string(),
            severity: "ERROR".to_string(),
            category: "string_representation".to_string(),
            message: format!("Debug output of `{}` is empty", descriptor.name()),
            type_name,
            property: None,
            constant: None,
            law: None,
            fix_hint: Some("Render the type name and fields in Debug".to_string()),
            suppressed: false,
            suppress_hint: None,
        });
    }

    violations
}

fn invocation_failure(
    descriptor: &ModelDescriptor,
    property: &str,
    payload: Box<dyn std::any::Any + Send>,
) -> Violation {
    Violation {
        code: "E007".to_string(),
        severity: "ERROR".to_string(),
        category: "invocation_failure".to_string(),
        message: format!(
            "Accessor or mutator of property `{}` panicked: {}",
            property,
            panic_message(payload)
        ),
        type_name: descriptor.qualified_name(),
        property: Some(property.to_string()),
        constant: None,
        law: None,
        fix_hint: Some(format!(
            "Fix the registered getter/setter of `{}`",
            property
        )),
        suppressed: false,
        suppress_hint: None,
    }
}
