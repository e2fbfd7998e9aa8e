//! Run-level relaxations of the equality-contract checks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::Violation;

/// An explicitly accepted relaxation, applied uniformly to every model in a
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
    /// Equality need not depend on every registered property.
    UnusedProperties,
    /// Mutated state need not round-trip through equality and hash.
    MutableProperties,
    /// The degenerate-hash heuristic is waived.
    TrivialHash,
}

impl Relaxation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relaxation::UnusedProperties => "unused_properties",
            Relaxation::MutableProperties => "mutable_properties",
            Relaxation::TrivialHash => "trivial_hash",
        }
    }

    /// Parse the snake_case name used in configuration files.
    pub fn parse(name: &str) -> Option<Relaxation> {
        match name {
            "unused_properties" => Some(Relaxation::UnusedProperties),
            "mutable_properties" => Some(Relaxation::MutableProperties),
            "trivial_hash" => Some(Relaxation::TrivialHash),
            _ => None,
        }
    }
}

/// The set of active relaxations.
///
/// When a relaxation covers a violation, the violation is:
/// - Changed to severity "INFO" and marked suppressed=true
/// - Code changed to "S001"
/// - Given a suppress_hint naming the relaxation
#[derive(Debug, Clone, Default)]
pub struct SuppressionSet {
    active: HashSet<Relaxation>,
}

impl SuppressionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a relaxation. Must be called before the run starts.
    pub fn relax(&mut self, relaxation: Relaxation) {
        self.active.insert(relaxation);
    }

    pub fn is_relaxed(&self, relaxation: Relaxation) -> bool {
        self.active.contains(&relaxation)
    }

    /// Apply the active relaxations to a violation, returning the modified
    /// violation. Violations not covered by any relaxation pass through
    /// unchanged.
    pub fn apply(&self, mut violation: Violation) -> Violation {
        let Some(relaxation) = relaxation_for(&violation) else {
            return violation;
        };
        if self.is_relaxed(relaxation) {
            violation.suppress_hint = Some(format!(
                "Suppressed {} via relaxation `{}`",
                violation.code,
                relaxation.as_str()
            ));
            violation.suppressed = true;
            violation.code = "S001".to_string();
            violation.severity = "INFO".to_string();
        }
        violation
    }

    /// Number of active relaxations.
    pub fn count(&self) -> usize {
        self.active.len()
    }
}

/// Which relaxation, if any, covers a violation.
fn relaxation_for(violation: &Violation) -> Option<Relaxation> {
    match (violation.code.as_str(), violation.law.as_deref()) {
        ("E004", Some("field_sensitivity")) => Some(Relaxation::UnusedProperties),
        ("E004", Some("state_revert")) => Some(Relaxation::MutableProperties),
        ("E005", _) => Some(Relaxation::TrivialHash),
        _ => None,
    }
}
