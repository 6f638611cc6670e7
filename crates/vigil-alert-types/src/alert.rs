//! The tracked alert record.

use crate::{AlertStatus, AuditRecord, RemediationAction};
use serde::{Deserialize, Serialize};

/// One failing control evaluation under triage.
///
/// Created by the collector from a failed [`AuditRecord`], mutated by the
/// investigator and the remediation executor, and archived verbatim into
/// the remediation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Stable identifier, unique even when several failures share a
    /// control id.
    pub alert_id: String,
    /// Control identifier from the source record.
    pub control_id: String,
    /// Control title.
    pub title: String,
    /// Severity label, copied verbatim.
    pub severity: String,
    /// Source evaluation status (always `Fail` at creation).
    pub status: String,
    /// Evidence from the source record.
    pub evidence: String,
    /// Evaluation timestamp, copied verbatim.
    pub timestamp: String,
    /// Documentation reference.
    pub reference: String,
    /// Expected configuration.
    pub expected: String,
    /// Observed configuration.
    pub actual: String,
    /// Lifecycle state.
    pub alert_status: AlertStatus,
    /// Set when remediation cannot be safely automated or failed.
    pub escalated: bool,
    /// Set when investigation classifies the finding as inconclusive.
    pub false_positive: bool,
    /// Set when an automated remediation succeeded.
    pub remediation_applied: bool,
    /// Action ultimately taken, if any.
    pub remediation_action: Option<RemediationAction>,
}

impl Alert {
    /// Build an alert from a failed audit record.
    ///
    /// `seq` is the 1-based position of the record in the source file,
    /// which keeps ids deterministic and distinct across duplicate
    /// control ids.
    pub fn from_record(seq: usize, record: &AuditRecord) -> Self {
        Self {
            alert_id: format!("ALERT-{:04}-{}", seq, record.control_id),
            control_id: record.control_id.clone(),
            title: record.title.clone(),
            severity: record.severity.clone(),
            status: record.status.as_str().to_string(),
            evidence: record.evidence.clone(),
            timestamp: record.timestamp.clone(),
            reference: record.reference.clone(),
            expected: record.expected.clone(),
            actual: record.actual.clone(),
            alert_status: AlertStatus::Open,
            escalated: false,
            false_positive: false,
            remediation_applied: false,
            remediation_action: None,
        }
    }

    /// Advance the lifecycle state.
    ///
    /// Terminal states are sticky: once `Escalated` or `Closed`, further
    /// transitions are ignored.
    pub fn advance_status(&mut self, next: AlertStatus) {
        if !self.alert_status.is_terminal() {
            self.alert_status = next;
        }
    }
}
