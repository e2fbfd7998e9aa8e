//! Conformance checkers for registered models and enumerations.
//!
//! Validates every type discovered under a namespace and produces violations:
//! - E001: construction failed (model constructor panicked)
//! - E002: property round-trip (setter/getter disagree on a sample value)
//! - E003: string representation (Debug output missing or ignores state)
//! - E004: equality contract (a law of equals/hash violated; see `law` field)
//! - E005: degenerate hash (hash of a populated instance is not field-derived)
//! - E006: enum accessor absent (accessor yields nothing for a constant)
//! - E007: invocation failure (a registered closure panicked, wrapped)
//! - S001: suppressed (downgraded to INFO by an active relaxation)

pub mod convention;
pub mod discovery;
pub mod engine;
pub mod enum_check;
pub mod equality;
pub mod suppress;
pub mod types;
pub mod util;
