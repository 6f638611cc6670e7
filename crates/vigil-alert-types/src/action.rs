//! Remediation actions.

use serde::{Deserialize, Serialize};

/// Corrective action selected for a failing control.
///
/// The policy layer maps control ids to actions through a rule table, so
/// adding an action here only requires a new rule entry, not new dispatch
/// logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemediationAction {
    /// No action; used for false positives.
    None,
    /// Tenant policy change considered safe to automate.
    UpdatePolicy,
    /// Too sensitive to automate; escalate to an operator.
    ManualReview,
}

impl RemediationAction {
    /// Stable string name used in remediation results and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::UpdatePolicy => "update_policy",
            Self::ManualReview => "manual_review",
        }
    }
}

impl std::fmt::Display for RemediationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
