//! Alert lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an alert.
///
/// Transitions only ever advance: `Open` → `Investigating` →
/// `Remediated` | `Escalated`, with `Closed` reached from `Remediated` or
/// a false-positive determination. `Escalated` and `Closed` are terminal;
/// an escalation requires human action outside this system and is never
/// auto-closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Newly collected, not yet examined.
    Open,
    /// Investigation in progress or complete, remediation pending.
    Investigating,
    /// Automated remediation applied successfully.
    Remediated,
    /// Handed off for manual operator intervention.
    Escalated,
    /// Resolved; no further action tracked here.
    Closed,
}

impl AlertStatus {
    /// Terminal states never regress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Escalated | Self::Closed)
    }
}

impl Default for AlertStatus {
    fn default() -> Self {
        Self::Open
    }
}
