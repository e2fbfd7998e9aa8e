//! Enum checker: every accessor must yield a present value on every constant.

use std::panic::{catch_unwind, AssertUnwindSafe};

use modelvet_core::descriptor::EnumDescriptor;
use serde_json::Value;

use crate::types::Violation;
use crate::util::panic_message;

/// Check E006/E007 for one enumeration.
///
/// Each (accessor, constant) pair is invoked exactly once; accessor panics
/// are caught and wrapped rather than tearing down the run.
pub fn check_enum(descriptor: &EnumDescriptor) -> Vec<Violation> {
    let mut violations = Vec::new();
    let type_name = descriptor.qualified_name();

    for (accessor_idx, accessor) in descriptor.accessors().iter().enumerate() {
        for (constant_idx, constant) in descriptor.constants().iter().enumerate() {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                descriptor.invoke(constant_idx, accessor_idx)
            }));
            match outcome {
                Err(payload) => violations.push(Violation {
                    code: "E007".to_string(),
                    severity: "ERROR".to_string(),
                    category: "invocation_failure".to_string(),
                    message: format!(
                        "Accessor `{}` panicked for constant `{}`: {}",
                        accessor,
                        constant,
                        panic_message(payload)
                    ),
                    type_name: type_name.clone(),
                    property: Some(accessor.clone()),
                    constant: Some(constant.clone()),
                    law: None,
                    fix_hint: Some(format!(
                        "Make `{}` total over every constant of `{}`",
                        accessor,
                        descriptor.name()
                    )),
                    suppressed: false,
                    suppress_hint: None,
                }),
                // JSON null counts as absent: the accessor produced a
                // value-shaped nothing.
                Ok(None) | Ok(Some(Value::Null)) => violations.push(Violation {
                    code: "E006".to_string(),
                    severity: "ERROR".to_string(),
                    category: "enum_accessor_absent".to_string(),
                    message: format!(
                        "Accessor `{}` returned absent for constant `{}`",
                        accessor, constant
                    ),
                    type_name: type_name.clone(),
                    property: Some(accessor.clone()),
                    constant: Some(constant.clone()),
                    law: None,
                    fix_hint: Some(format!(
                        "Return a value from `{}` for constant `{}`",
                        accessor, constant
                    )),
                    suppressed: false,
                    suppress_hint: None,
                }),
                Ok(Some(_)) => {}
            }
        }
    }

    violations
}
