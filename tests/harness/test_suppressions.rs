// Behavioral tests for run-level relaxations.
use modelvet_core::binding::ModelBinding;
use modelvet_core::catalog::ModelRegistry;
use modelvet_enforce::engine::ValidationEngine;
use modelvet_enforce::suppress::Relaxation;
use serde_json::json;

use crate::common::NAMESPACE;

#[derive(Debug, Clone, Hash, Default)]
struct Sloppy {
    id: u32,
    balance: i64,
}
impl PartialEq for Sloppy {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

fn sloppy_registry() -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    registry.register_model(
        NAMESPACE,
        ModelBinding::new("Sloppy", Sloppy::default)
            .property(
                "id",
                |s: &Sloppy| json!(s.id),
                |s: &mut Sloppy, v| s.id = v.as_u64().unwrap_or(0) as u32,
                json!(7),
                json!(13),
            )
            .property(
                "balance",
                |s: &Sloppy| json!(s.balance),
                |s: &mut Sloppy, v| s.balance = v.as_i64().unwrap_or(0),
                json!(250),
                json!(-40),
            ),
    );
    registry
}

#[test]
fn test_strict_default_fails_field_sensitivity() {
    let engine = ValidationEngine::new(Box::new(sloppy_registry()));
    let report = engine.validate(NAMESPACE).unwrap();
    assert_eq!(report.status, "error");
    assert!(report
        .errors
        .iter()
        .any(|v| v.law.as_deref() == Some("field_sensitivity")));
}

#[test]
fn test_unused_properties_relaxation_downgrades_but_still_reports() {
    let mut engine = ValidationEngine::new(Box::new(sloppy_registry()));
    engine.relax(Relaxation::UnusedProperties);
    let report = engine.validate(NAMESPACE).unwrap();
    assert!(report.passed());
    assert!(report.errors.is_empty());
    assert_eq!(report.infos.len(), 1);
    let info = &report.infos[0];
    assert_eq!(info.code, "S001");
    assert_eq!(info.severity, "INFO");
    assert!(info.suppressed);
    assert!(info
        .suppress_hint
        .as_deref()
        .unwrap()
        .contains("unused_properties"));
}

#[test]
fn test_relaxation_does_not_hide_unrelated_violations() {
    #[derive(Debug, Clone, PartialEq, Default)]
    struct StubHash {
        id: u32,
    }
    impl std::hash::Hash for StubHash {
        fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
    }

    let mut registry = ModelRegistry::new();
    registry.register_model(
        NAMESPACE,
        ModelBinding::new("StubHash", StubHash::default).property(
            "id",
            |s: &StubHash| json!(s.id),
            |s: &mut StubHash, v| s.id = v.as_u64().unwrap_or(0) as u32,
            json!(7),
            json!(13),
        ),
    );

    // UnusedProperties does not cover a degenerate hash.
    let mut engine = ValidationEngine::new(Box::new(registry));
    engine.relax(Relaxation::UnusedProperties);
    let report = engine.validate(NAMESPACE).unwrap();
    assert_eq!(report.status, "error");
    assert!(report.errors.iter().any(|v| v.code == "E005"));
}

#[test]
fn test_trivial_hash_relaxation_waives_hash_sanity() {
    #[derive(Debug, Clone, PartialEq, Default)]
    struct StubHash {
        id: u32,
    }
    impl std::hash::Hash for StubHash {
        fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
    }

    let mut registry = ModelRegistry::new();
    registry.register_model(
        NAMESPACE,
        ModelBinding::new("StubHash", StubHash::default).property(
            "id",
            |s: &StubHash| json!(s.id),
            |s: &mut StubHash, v| s.id = v.as_u64().unwrap_or(0) as u32,
            json!(7),
            json!(13),
        ),
    );

    let mut engine = ValidationEngine::new(Box::new(registry));
    engine.relax(Relaxation::TrivialHash);
    let report = engine.validate(NAMESPACE).unwrap();
    assert!(report.passed());
    assert!(report.infos.iter().any(|v| v.code == "S001"));
}
