// Behavioral tests for the equality contract and hash sanity (E004, E005).
use modelvet_core::binding::ModelBinding;
use modelvet_core::catalog::ModelRegistry;
use modelvet_enforce::engine::ValidationEngine;
use serde_json::json;

use crate::common::{sample_registry, NAMESPACE};

#[test]
fn test_sound_model_upholds_the_contract() {
    let engine = ValidationEngine::new(Box::new(sample_registry()));
    let report = engine.validate(NAMESPACE).unwrap();
    assert!(report.passed());
}

#[test]
fn test_equality_ignoring_balance_is_reported() {
    #[derive(Debug, Clone, Hash, Default)]
    struct Account {
        id: u32,
        balance: i64,
    }
    impl PartialEq for Account {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id // balance forgotten
        }
    }

    let mut registry = ModelRegistry::new();
    registry.register_model(
        NAMESPACE,
        ModelBinding::new("Account", Account::default)
            .property(
                "id",
                |a: &Account| json!(a.id),
                |a: &mut Account, v| a.id = v.as_u64().unwrap_or(0) as u32,
                json!(7),
                json!(13),
            )
            .property(
                "balance",
                |a: &Account| json!(a.balance),
                |a: &mut Account, v| a.balance = v.as_i64().unwrap_or(0),
                json!(250),
                json!(-40),
            ),
    );
    let engine = ValidationEngine::new(Box::new(registry));
    let report = engine.validate(NAMESPACE).unwrap();
    assert_eq!(report.status, "error");
    assert_eq!(report.errors.len(), 1);
    let violation = &report.errors[0];
    assert_eq!(violation.code, "E004");
    assert_eq!(violation.law.as_deref(), Some("field_sensitivity"));
    assert_eq!(violation.property.as_deref(), Some("balance"));
}

#[test]
fn test_hash_ignoring_equal_fields_fails_hash_consistency() {
    // Equality uses both fields; the hash only sees a process-local counter,
    // so two equal instances hash differently.
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);

    #[derive(Debug, Clone, Default)]
    struct Tagged {
        id: u32,
        tag: u64,
    }
    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }
    impl std::hash::Hash for Tagged {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.tag.hash(state);
        }
    }

    let mut registry = ModelRegistry::new();
    registry.register_model(
        NAMESPACE,
        ModelBinding::new("Tagged", || Tagged {
            id: 0,
            tag: COUNTER.fetch_add(1, Ordering::Relaxed),
        })
        .property(
            "id",
            |t: &Tagged| json!(t.id),
            |t: &mut Tagged, v| t.id = v.as_u64().unwrap_or(0) as u32,
            json!(7),
            json!(13),
        ),
    );
    let engine = ValidationEngine::new(Box::new(registry));
    let report = engine.validate(NAMESPACE).unwrap();
    assert!(report
        .errors
        .iter()
        .any(|v| v.code == "E004" && v.law.as_deref() == Some("hash_consistent")));
}

#[test]
fn test_stub_hash_fails_sanity() {
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
    let engine = ValidationEngine::new(Box::new(registry));
    let report = engine.validate(NAMESPACE).unwrap();
    assert!(report
        .errors
        .iter()
        .any(|v| v.code == "E005" && v.category == "degenerate_hash"));
}
