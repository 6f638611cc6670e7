//! Per-alert investigation and false-positive screening.

use tracing::debug;
use vigil_alert_types::{Alert, AlertStatus, InvestigationReport};

use crate::policy::TriagePolicy;

/// Where investigation evidence originates.
const EVIDENCE_SOURCE: &str = "compliance-audit";

/// Investigate one alert.
///
/// Pure function of the alert's fields and the policy tables: builds the
/// evidence trail (evidence, timestamp, expected and actual values appear
/// verbatim), screens the evidence against the false-positive indicator
/// phrases, and moves the alert out of `Open`. Terminal states are left
/// untouched.
pub fn investigate(alert: &mut Alert, policy: &TriagePolicy) -> InvestigationReport {
    let mut logs = vec![
        format!("Evidence: {}", alert.evidence),
        format!("Observed at: {}", alert.timestamp),
        format!("Expected configuration: {}", alert.expected),
        format!("Actual configuration: {}", alert.actual),
    ];

    let matched = policy.false_positive_match(&alert.evidence);
    let false_positive_reason = matched.map(|indicator| {
        format!("evidence matched inconclusive indicator '{indicator}'")
    });
    if let Some(reason) = &false_positive_reason {
        logs.push(format!("Classified as probable false positive: {reason}"));
        debug!(alert_id = %alert.alert_id, %reason, "false positive detected");
    }

    alert.false_positive = matched.is_some();
    alert.advance_status(AlertStatus::Investigating);

    InvestigationReport {
        alert_id: alert.alert_id.clone(),
        severity: alert.severity.clone(),
        source: EVIDENCE_SOURCE.to_string(),
        logs,
        endpoints: Vec::new(),
        user_activity: Vec::new(),
        is_false_positive: matched.is_some(),
        false_positive_reason,
    }
}
