use serde::{Deserialize, Serialize};

/// A single conformance violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub severity: String, // "ERROR" | "INFO"
    pub category: String,
    pub message: String,
    /// Fully-qualified name of the offending type.
    pub type_name: String,
    pub property: Option<String>,
    pub constant: Option<String>,
    /// Which equality-contract law was violated (E004 only).
    pub law: Option<String>,
    pub fix_hint: Option<String>,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
}

/// Result of one validation run over a namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub version: String,
    pub namespace: String,
    pub status: String, // "ok" | "error"
    pub types_checked: Vec<String>,
    pub errors: Vec<Violation>,
    pub infos: Vec<Violation>,
    pub summary: ReportSummary,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub models_checked: u32,
    pub enums_checked: u32,
    pub types_excluded: u32,
}
