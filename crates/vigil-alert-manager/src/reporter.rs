//! Statistics aggregation and report artifact generation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use vigil_alert_types::{Alert, AlertStatus, InvestigationReport, RemediationResult};

/// Report generation failure.
///
/// Surfaced to the caller; in-memory triage state is untouched, so a
/// retry never requires re-running the triage pass.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output directory or file could not be written.
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Report document could not be serialized.
    #[error("report serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Aggregate counts from a full triage pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageStats {
    /// Alerts collected.
    pub total_alerts: usize,
    /// Alerts investigated.
    pub investigated: usize,
    /// Alerts remediated automatically.
    pub remediated: usize,
    /// Alerts escalated for manual action.
    pub escalated: usize,
    /// Alerts classified as false positives.
    pub false_positives: usize,
}

/// Per-severity outcome bucket in the summary report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeverityBucket {
    pub total: usize,
    pub remediated: usize,
    pub escalated: usize,
    pub false_positives: usize,
}

#[derive(Serialize)]
struct RemediationLog<'a> {
    generated: String,
    dry_run: bool,
    alerts: &'a [Alert],
    investigations: &'a BTreeMap<String, InvestigationReport>,
    remediations: &'a BTreeMap<String, RemediationResult>,
}

#[derive(Serialize)]
struct SummaryReport {
    report_date: String,
    dry_run_mode: bool,
    statistics: Statistics,
    actions_taken: Vec<ActionTaken>,
    pending_escalations: Vec<PendingEscalation>,
}

#[derive(Serialize)]
struct Statistics {
    total_alerts: usize,
    remediated: usize,
    escalated: usize,
    false_positives: usize,
    closed: usize,
    by_severity: BTreeMap<String, SeverityBucket>,
}

#[derive(Serialize)]
struct ActionTaken {
    alert_id: String,
    control_id: String,
    action: String,
    details: String,
}

#[derive(Serialize)]
struct PendingEscalation {
    alert_id: String,
    severity: String,
    evidence: String,
    investigation_summary: String,
    next_steps: Vec<String>,
}

/// Write the remediation log: a durable record of every alert,
/// investigation and remediation decision from this run.
pub(crate) fn write_remediation_log(
    output_dir: &Path,
    dry_run: bool,
    alerts: &[Alert],
    investigations: &BTreeMap<String, InvestigationReport>,
    remediations: &BTreeMap<String, RemediationResult>,
) -> Result<PathBuf, ReportError> {
    let log = RemediationLog {
        generated: Utc::now().to_rfc3339(),
        dry_run,
        alerts,
        investigations,
        remediations,
    };

    let path = output_dir.join(format!("remediation_log_{}.json", file_stamp()));
    fs::write(&path, serde_json::to_string_pretty(&log)?)?;
    info!(path = %path.display(), "remediation log written");
    Ok(path)
}

/// Write the summary report: aggregate statistics, completed actions and
/// pending escalations with operator next-steps.
pub(crate) fn write_summary_report(
    output_dir: &Path,
    dry_run: bool,
    alerts: &[Alert],
    investigations: &BTreeMap<String, InvestigationReport>,
    remediations: &BTreeMap<String, RemediationResult>,
) -> Result<PathBuf, ReportError> {
    let mut by_severity: BTreeMap<String, SeverityBucket> = BTreeMap::new();
    for alert in alerts {
        let bucket = by_severity.entry(alert.severity.clone()).or_default();
        bucket.total += 1;
        if alert.remediation_applied {
            bucket.remediated += 1;
        }
        if alert.escalated {
            bucket.escalated += 1;
        }
        if alert.false_positive {
            bucket.false_positives += 1;
        }
    }

    let statistics = Statistics {
        total_alerts: alerts.len(),
        remediated: alerts.iter().filter(|a| a.remediation_applied).count(),
        escalated: alerts.iter().filter(|a| a.escalated).count(),
        false_positives: alerts.iter().filter(|a| a.false_positive).count(),
        closed: alerts
            .iter()
            .filter(|a| a.alert_status == AlertStatus::Closed)
            .count(),
        by_severity,
    };

    let actions_taken = alerts
        .iter()
        .filter_map(|alert| {
            let result = remediations.get(&alert.alert_id)?;
            if !result.success || result.action == "none" {
                return None;
            }
            Some(ActionTaken {
                alert_id: alert.alert_id.clone(),
                control_id: alert.control_id.clone(),
                action: result.action.clone(),
                details: result.details.clone(),
            })
        })
        .collect();

    let pending_escalations = alerts
        .iter()
        .filter(|alert| alert.escalated)
        .map(|alert| PendingEscalation {
            alert_id: alert.alert_id.clone(),
            severity: alert.severity.clone(),
            evidence: alert.evidence.clone(),
            investigation_summary: investigation_summary(alert, investigations),
            next_steps: generate_next_steps(alert),
        })
        .collect();

    let report = SummaryReport {
        report_date: Utc::now().to_rfc3339(),
        dry_run_mode: dry_run,
        statistics,
        actions_taken,
        pending_escalations,
    };

    let path = output_dir.join(format!("alert_summary_{}.json", file_stamp()));
    fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    info!(path = %path.display(), "summary report written");
    Ok(path)
}

/// Ordered, human-actionable steps for an escalated alert.
pub(crate) fn generate_next_steps(alert: &Alert) -> Vec<String> {
    vec![
        format!(
            "Review control {} ({}) with the resource owner",
            alert.control_id, alert.title
        ),
        format!(
            "Compare expected state '{}' against observed state '{}'",
            alert.expected, alert.actual
        ),
        "Validate the proposed change in a test environment before applying to production"
            .to_string(),
        format!("Consult the control documentation: {}", alert.reference),
    ]
}

fn investigation_summary(
    alert: &Alert,
    investigations: &BTreeMap<String, InvestigationReport>,
) -> String {
    match investigations.get(&alert.alert_id) {
        Some(report) => match &report.false_positive_reason {
            Some(reason) => reason.clone(),
            None => format!(
                "{} evidence entries collected; no false-positive indicator matched",
                report.logs.len()
            ),
        },
        None => "not yet investigated".to_string(),
    }
}

// Millisecond resolution keeps filenames from colliding across
// back-to-back runs.
fn file_stamp() -> String {
    Utc::now().format("%Y%m%d_%H%M%S%3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_alert_types::{AuditRecord, AuditStatus};

    fn escalated_alert() -> Alert {
        let record = AuditRecord {
            control_id: "CIS-ADMIN-1".to_string(),
            title: "Limit Global Administrator role assignments".to_string(),
            severity: "Critical".to_string(),
            expected: "Maximum 5 Global Administrators".to_string(),
            actual: "8 Global Administrators found".to_string(),
            status: AuditStatus::Fail,
            evidence: "Found 8 users with Global Administrator role".to_string(),
            reference: "https://docs.example.com/cis-controls".to_string(),
            timestamp: "2025-12-11T10:02:00".to_string(),
        };
        let mut alert = Alert::from_record(1, &record);
        alert.escalated = true;
        alert.advance_status(AlertStatus::Escalated);
        alert
    }

    #[test]
    fn next_steps_name_control_and_reference() {
        let alert = escalated_alert();
        let steps = generate_next_steps(&alert);

        assert!(!steps.is_empty());
        assert!(steps.iter().any(|s| s.contains(&alert.control_id)));
        assert!(steps.iter().any(|s| s.to_lowercase().contains("test environment")));
        assert!(steps.iter().any(|s| s.to_lowercase().contains("documentation")));
        assert!(steps.iter().any(|s| s.contains(&alert.reference)));
    }

    #[test]
    fn summary_without_investigation_is_still_nonempty() {
        let alert = escalated_alert();
        let summary = investigation_summary(&alert, &BTreeMap::new());
        assert!(!summary.is_empty());
    }
}
