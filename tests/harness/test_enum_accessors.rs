// Behavioral tests for the enum accessor checks (E006, E007).
use modelvet_core::binding::EnumBinding;
use modelvet_core::catalog::ModelRegistry;
use modelvet_enforce::engine::ValidationEngine;
use serde_json::json;

use crate::common::{sample_registry, Status, NAMESPACE};

#[test]
fn test_labelled_enum_passes() {
    let engine = ValidationEngine::new(Box::new(sample_registry()));
    let report = engine.validate(NAMESPACE).unwrap();
    assert!(report.passed());
    assert_eq!(report.summary.enums_checked, 1);
}

#[test]
fn test_absent_label_names_accessor_and_constant() {
    let mut registry = ModelRegistry::new();
    registry.register_enum(
        NAMESPACE,
        EnumBinding::new("Status")
            .constant("ACTIVE", Status::Active)
            .constant("INACTIVE", Status::Inactive)
            .accessor("label", |s: &Status| match s {
                Status::Active => Some(json!("active")),
                Status::Inactive => None,
            }),
    );
    let engine = ValidationEngine::new(Box::new(registry));
    let report = engine.validate(NAMESPACE).unwrap();
    assert_eq!(report.status, "error");
    assert_eq!(report.errors.len(), 1);
    let violation = &report.errors[0];
    assert_eq!(violation.code, "E006");
    assert_eq!(violation.property.as_deref(), Some("label"));
    assert_eq!(violation.constant.as_deref(), Some("INACTIVE"));
    assert!(violation.message.contains("label"));
    assert!(violation.message.contains("INACTIVE"));
}

#[test]
fn test_every_accessor_runs_on_every_constant() {
    let mut registry = ModelRegistry::new();
    registry.register_enum(
        NAMESPACE,
        EnumBinding::new("Status")
            .constant("ACTIVE", Status::Active)
            .constant("INACTIVE", Status::Inactive)
            .accessor("label", |_: &Status| None)
            .accessor("code", |_: &Status| None),
    );
    let engine = ValidationEngine::new(Box::new(registry));
    let report = engine.validate(NAMESPACE).unwrap();
    // 2 accessors x 2 constants
    assert_eq!(report.errors.len(), 4);
}

#[test]
fn test_panicking_accessor_is_surfaced_not_swallowed() {
    let mut registry = ModelRegistry::new();
    registry.register_enum(
        NAMESPACE,
        EnumBinding::new("Status")
            .constant("ACTIVE", Status::Active)
            .constant("INACTIVE", Status::Inactive)
            .accessor("label", |s: &Status| match s {
                Status::Active => Some(json!("active")),
                Status::Inactive => panic!("lookup table missing entry"),
            }),
    );
    let engine = ValidationEngine::new(Box::new(registry));
    let report = engine.validate(NAMESPACE).unwrap();
    assert_eq!(report.status, "error");
    assert_eq!(report.errors.len(), 1);
    let violation = &report.errors[0];
    assert_eq!(violation.code, "E007");
    assert_eq!(violation.category, "invocation_failure");
    assert!(violation.message.contains("lookup table missing entry"));
    assert_eq!(violation.constant.as_deref(), Some("INACTIVE"));
}
