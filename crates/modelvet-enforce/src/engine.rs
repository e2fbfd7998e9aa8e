use modelvet_core::catalog::TypeCatalog;
use modelvet_core::config::{ChecksConfig, ModelvetConfig};
use modelvet_core::types::CatalogError;

use crate::convention;
use crate::discovery::{self, ExclusionSet};
use crate::enum_check;
use crate::equality;
use crate::suppress::{Relaxation, SuppressionSet};
use crate::types::{ReportSummary, ValidationReport, Violation};

/// Orchestrates one validation run. Owns a TypeCatalog and the run
/// configuration.
///
/// Configuration hooks ([`exclude_type`](Self::exclude_type),
/// [`exclude_suffix`](Self::exclude_suffix), [`relax`](Self::relax)) must be
/// called before [`validate`](Self::validate); the configuration is read-only
/// once a run starts.
pub struct ValidationEngine {
    pub(crate) catalog: Box<dyn TypeCatalog + Send>,
    pub(crate) exclusions: ExclusionSet,
    pub(crate) suppressions: SuppressionSet,
    pub(crate) checks: ChecksConfig,
}

impl ValidationEngine {
    pub fn new(catalog: Box<dyn TypeCatalog + Send>) -> Self {
        Self {
            catalog,
            exclusions: ExclusionSet::default(),
            suppressions: SuppressionSet::new(),
            checks: ChecksConfig::default(),
        }
    }

    /// Create an engine configured from a `ModelvetConfig`.
    pub fn with_config(catalog: Box<dyn TypeCatalog + Send>, config: &ModelvetConfig) -> Self {
        let mut exclusions = ExclusionSet::empty();
        for suffix in &config.excluded_suffixes {
            exclusions.exclude_suffix(suffix);
        }
        for name in &config.excluded_types {
            exclusions.exclude_name(name);
        }

        let mut suppressions = SuppressionSet::new();
        for name in &config.relaxations {
            match Relaxation::parse(name) {
                Some(relaxation) => suppressions.relax(relaxation),
                None => eprintln!(
                    "modelvet: warning: unknown relaxation `{}` in config, ignoring",
                    name
                ),
            }
        }

        Self {
            catalog,
            exclusions,
            suppressions,
            checks: config.checks.clone(),
        }
    }

    /// Exclude a fully-qualified type name from validation.
    pub fn exclude_type(&mut self, name: &str) {
        self.exclusions.exclude_name(name);
    }

    /// Exclude every type whose qualified name ends with `suffix`.
    pub fn exclude_suffix(&mut self, suffix: &str) {
        self.exclusions.exclude_suffix(suffix);
    }

    /// Accept a relaxation of the equality-contract checks.
    pub fn relax(&mut self, relaxation: Relaxation) {
        self.suppressions.relax(relaxation);
    }

    /// Validate every type under `namespace`. Returns the report, or the
    /// fatal error when the namespace cannot be resolved.
    pub fn validate(&self, namespace: &str) -> Result<ValidationReport, CatalogError> {
        let discovered = discovery::discover(&*self.catalog, namespace, &self.exclusions)?;

        let mut errors = Vec::new();
        let mut infos = Vec::new();
        let mut types_checked = Vec::new();
        let mut models_checked: u32 = 0;

        for descriptor in &discovered.enums {
            types_checked.push(descriptor.qualified_name());
            self.collect(enum_check::check_enum(descriptor), &mut errors, &mut infos);
        }

        for descriptor in &discovered.models {
            if descriptor.is_abstract() {
                continue;
            }
            types_checked.push(descriptor.qualified_name());
            models_checked += 1;

            // The three steps are independent: a convention failure does not
            // stop the equality or hash checks from running.
            let mut violations = Vec::new();
            if self.checks.conventions {
                violations.extend(convention::check_conventions(descriptor));
            }
            if self.checks.equality {
                violations.extend(equality::check_equality(descriptor));
            }
            if self.checks.hash_sanity {
                violations.extend(equality::check_hash_sanity(descriptor));
            }
            self.collect(violations, &mut errors, &mut infos);
        }

        let status = if errors.is_empty() { "ok" } else { "error" };

        Ok(ValidationReport {
            version: "0.1.0".to_string(),
            namespace: namespace.to_string(),
            status: status.to_string(),
            types_checked,
            errors,
            infos,
            summary: ReportSummary {
                models_checked,
                enums_checked: discovered.enums.len() as u32,
                types_excluded: discovered.excluded,
            },
        })
    }

    // -- Private helpers --

    fn collect(
        &self,
        violations: Vec<Violation>,
        errors: &mut Vec<Violation>,
        infos: &mut Vec<Violation>,
    ) {
        for violation in violations {
            let violation = self.suppressions.apply(violation);
            match violation.severity.as_str() {
                "ERROR" => errors.push(violation),
                _ => infos.push(violation),
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
