//! Equality-contract checker and the hash-sanity heuristic.
//!
//! Laws are checked over synthesized instances populated from each
//! property's first sample. Null-inequality and subclass-comparison laws
//! from the classic contract are discharged statically by the type system
//! and have no runtime counterpart here.

use std::panic::{catch_unwind, AssertUnwindSafe};

use modelvet_core::descriptor::{ModelDescriptor, ModelInstance};
use modelvet_core::hash::empty_input_hash;

use crate::types::Violation;

/// Check E004 for one non-abstract model. Each violated law is reported
/// once, tagged in the `law` field; field-sensitivity violations also name
/// the offending property.
///
/// Constructor or mutator panics are not re-reported here; the convention
/// checker already owns those.
pub fn check_equality(descriptor: &ModelDescriptor) -> Vec<Violation> {
    let mut violations = Vec::new();

    let Ok(Some(a)) = catch_unwind(AssertUnwindSafe(|| populate(descriptor))) else {
        return violations;
    };
    let Ok(Some(b)) = catch_unwind(AssertUnwindSafe(|| populate(descriptor))) else {
        return violations;
    };
    let Ok(Some(c)) = catch_unwind(AssertUnwindSafe(|| populate(descriptor))) else {
        return violations;
    };

    if !a.model_eq(&b) {
        violations.push(law_violation(
            descriptor,
            "value_equality",
            None,
            "Identically populated instances are not equal".to_string(),
            "Derive equality from the model's properties",
        ));
        // Everything below presupposes equal starting instances.
        return violations;
    }

    if !a.model_eq(&a) {
        violations.push(law_violation(
            descriptor,
            "reflexive",
            None,
            "An instance does not equal itself".to_string(),
            "Make equality reflexive",
        ));
    }

    if a.model_eq(&b) != b.model_eq(&a) {
        violations.push(law_violation(
            descriptor,
            "symmetric",
            None,
            "a == b and b == a disagree".to_string(),
            "Make equality symmetric",
        ));
    }

    if a.model_eq(&b) && b.model_eq(&c) && !a.model_eq(&c) {
        violations.push(law_violation(
            descriptor,
            "transitive",
            None,
            "a == b and b == c but a != c".to_string(),
            "Make equality transitive",
        ));
    }

    let first = a.model_eq(&b);
    if (0..3).any(|_| a.model_eq(&b) != first) {
        violations.push(law_violation(
            descriptor,
            "consistent",
            None,
            "Repeated comparisons of unchanged instances disagree".to_string(),
            "Remove non-determinism from equality",
        ));
    }

    if a.hash64() != b.hash64() || a.hash64() != a.hash64() {
        violations.push(law_violation(
            descriptor,
            "hash_consistent",
            None,
            "Equal instances do not share a stable hash".to_string(),
            "Derive the hash from the same fields as equality",
        ));
    }

    for (index, meta) in descriptor.properties().iter().enumerate() {
        if meta.equality_exempt {
            continue;
        }

        let flipped = catch_unwind(AssertUnwindSafe(|| {
            let mut probe = a.duplicate();
            probe.set(index, &meta.sample_b);
            probe.model_eq(&a)
        }));
        if let Ok(true) = flipped {
            violations.push(law_violation(
                descriptor,
                "field_sensitivity",
                Some(&meta.name),
                format!("Equality ignores property `{}`", meta.name),
                "Compare this property in PartialEq, or register it as exempt",
            ));
        }

        let reverted = catch_unwind(AssertUnwindSafe(|| {
            let mut probe = a.duplicate();
            probe.set(index, &meta.sample_b);
            probe.set(index, &meta.sample_a);
            (probe.model_eq(&a), probe.hash64())
        }));
        if let Ok((restored, hash)) = reverted {
            if !restored || hash != a.hash64() {
                violations.push(law_violation(
                    descriptor,
                    "state_revert",
                    Some(&meta.name),
                    format!(
                        "Reverting property `{}` does not restore equality and hash",
                        meta.name
                    ),
                    "Keep equality and hash pure functions of field state",
                ));
            }
        }
    }

    violations
}

/// Check E005 for one non-abstract model: the hash of a populated instance
/// must not be the degenerate value a stub implementation produces.
pub fn check_hash_sanity(descriptor: &ModelDescriptor) -> Vec<Violation> {
    let mut violations = Vec::new();

    let Ok(Some(instance)) = catch_unwind(AssertUnwindSafe(|| populate(descriptor))) else {
        return violations;
    };

    let hash = instance.hash64();
    if hash == 0 || hash == empty_input_hash() {
        violations.push(Violation {
            code: "E005".to_string(),
            severity: "ERROR".to_string(),
            category: "degenerate_hash".to_string(),
            message: format!(
                "Hash of a populated `{}` instance is degenerate ({:#x})",
                descriptor.name(),
                hash
            ),
            type_name: descriptor.qualified_name(),
            property: None,
            constant: None,
            law: None,
            fix_hint: Some("Derive Hash from the model's properties".to_string()),
            suppressed: false,
            suppress_hint: None,
        });
    }

    violations
}

/// Construct an instance and set every property to its first sample.
/// `None` for abstract descriptors; panics propagate to the caller.
fn populate(descriptor: &ModelDescriptor) -> Option<ModelInstance> {
    let mut instance = descriptor.construct()?;
    for (index, meta) in descriptor.properties().iter().enumerate() {
        instance.set(index, &meta.sample_a);
    }
    Some(instance)
}

fn law_violation(
    descriptor: &ModelDescriptor,
    law: &str,
    property: Option<&str>,
    message: String,
    fix_hint: &str,
) -> Violation {
    Violation {
        code: "E004".to_string(),
        severity: "ERROR".to_string(),
        category: "equality_contract".to_string(),
        message,
        type_name: descriptor.qualified_name(),
        property: property.map(str::to_string),
        constant: None,
        law: Some(law.to_string()),
        fix_hint: Some(fix_hint.to_string()),
        suppressed: false,
        suppress_hint: None,
    }
}
