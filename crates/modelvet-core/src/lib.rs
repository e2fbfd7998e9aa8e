//! Core descriptors, registry, and configuration for modelvet.
//!
//! This crate provides the foundational data structures used across the
//! modelvet crates:
//! - [`types`] — Type classification and catalog error types
//! - [`descriptor`] — Erased model/enum descriptors and synthesized instances
//! - [`binding`] — Typed registration builders test authors use
//! - [`catalog`] — The [`TypeCatalog`](catalog::TypeCatalog) trait and the
//!   in-memory [`ModelRegistry`](catalog::ModelRegistry)
//! - [`config`] — Configuration loading from `modelvet.json`
//! - [`hash`] — 64-bit hashing used by the equality-contract checks

pub mod binding;
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod hash;
pub mod types;
