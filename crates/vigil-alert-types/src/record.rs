//! Input contract: one control evaluation from an audit run.

use serde::{Deserialize, Serialize};

/// Outcome of a single control evaluation as reported by the audit source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditStatus {
    /// Control evaluated and compliant.
    Pass,
    /// Control evaluated and non-compliant.
    Fail,
    /// Control requires manual verification.
    Manual,
    /// The evaluation itself errored.
    Error,
    /// Any status string this subsystem does not recognize.
    Other(String),
}

impl From<String> for AuditStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pass" => Self::Pass,
            "Fail" => Self::Fail,
            "Manual" => Self::Manual,
            "Error" => Self::Error,
            _ => Self::Other(s),
        }
    }
}

impl From<AuditStatus> for String {
    fn from(status: AuditStatus) -> Self {
        status.as_str().to_string()
    }
}

impl AuditStatus {
    /// Source-format status string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Manual => "Manual",
            Self::Error => "Error",
            Self::Other(s) => s,
        }
    }

    /// Only failed evaluations are alertable.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

/// One control-evaluation record from the audit source.
///
/// Field names follow the audit file format (PascalCase keys). Timestamps
/// and severities are carried verbatim as strings; the triage policy, not
/// the deserializer, decides how an unknown severity ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuditRecord {
    /// Control identifier, e.g. `CIS-EXO-1`.
    pub control_id: String,
    /// Human-readable control title.
    pub title: String,
    /// Severity label (`Critical`, `High`, `Medium`, `Low`).
    pub severity: String,
    /// Expected configuration state.
    pub expected: String,
    /// Observed configuration state.
    pub actual: String,
    /// Evaluation outcome.
    pub status: AuditStatus,
    /// Evidence supporting the outcome.
    pub evidence: String,
    /// Documentation reference for the control.
    pub reference: String,
    /// When the control was evaluated.
    pub timestamp: String,
}
