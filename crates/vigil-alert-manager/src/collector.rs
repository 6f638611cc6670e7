//! Alert collection from audit results.

use std::fs;
use std::path::Path;

use thiserror::Error;
use vigil_alert_types::{Alert, AuditRecord};

use crate::policy::TriagePolicy;

/// Why the audit source could not be read.
///
/// Always recovered by the manager: an unreadable source yields zero
/// alerts and a warning, never a crash.
#[derive(Debug, Error)]
pub(crate) enum CollectError {
    #[error("cannot read audit source: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed audit data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse the full record set from the audit file.
pub(crate) fn load_records(path: &Path) -> Result<Vec<AuditRecord>, CollectError> {
    let raw = fs::read_to_string(path)?;
    let records = serde_json::from_str(&raw)?;
    Ok(records)
}

/// Build alerts for every failed record, sorted by descending severity
/// weight. The sort is stable, so ties keep source order. Alert ids are
/// derived from the record's position in the source file, before
/// filtering, so they stay deterministic across policy changes.
pub(crate) fn build_alerts(records: &[AuditRecord], policy: &TriagePolicy) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.status.is_fail())
        .map(|(index, record)| Alert::from_record(index + 1, record))
        .collect();

    alerts.sort_by(|a, b| {
        policy
            .severity_weight(&b.severity)
            .cmp(&policy.severity_weight(&a.severity))
    });
    alerts
}
