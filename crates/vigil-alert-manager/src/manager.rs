//! The alert lifecycle orchestrator.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use vigil_alert_types::{Alert, AlertStatus, InvestigationReport, RemediationResult};

use crate::collector;
use crate::investigator;
use crate::policy::TriagePolicy;
use crate::remediation::{self, PolicyBackend, RemediationBackend};
use crate::reporter::{self, ReportError, TriageStats};

/// Owns the alert list and the investigation/remediation tables and
/// drives the full lifecycle: collect → investigate → remediate →
/// close → report.
///
/// All tables are keyed by `alert_id`; repeat processing of the same
/// alert overwrites the previous entry.
pub struct AlertManager {
    audit_path: PathBuf,
    output_dir: PathBuf,
    dry_run: bool,
    policy: TriagePolicy,
    backend: Box<dyn RemediationBackend>,
    alerts: Vec<Alert>,
    investigations: BTreeMap<String, InvestigationReport>,
    remediations: BTreeMap<String, RemediationResult>,
}

impl AlertManager {
    /// Create a manager for one audit source.
    ///
    /// Creates `output_dir` (recursively) if absent; failure to do so is
    /// returned, never swallowed. `dry_run` affects only log wording and
    /// result metadata, not decisions.
    pub fn new(
        audit_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        dry_run: bool,
    ) -> Result<Self, ReportError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            audit_path: audit_path.into(),
            output_dir,
            dry_run,
            policy: TriagePolicy::default(),
            backend: Box::new(PolicyBackend),
            alerts: Vec::new(),
            investigations: BTreeMap::new(),
            remediations: BTreeMap::new(),
        })
    }

    /// Replace the triage policy tables.
    pub fn with_policy(mut self, policy: TriagePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the remediation backend.
    pub fn with_backend(mut self, backend: Box<dyn RemediationBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Collected alerts, in processing (severity) order.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Investigation reports keyed by alert id.
    pub fn investigations(&self) -> &BTreeMap<String, InvestigationReport> {
        &self.investigations
    }

    /// Remediation results keyed by alert id.
    pub fn remediations(&self) -> &BTreeMap<String, RemediationResult> {
        &self.remediations
    }

    /// The policy tables in effect.
    pub fn policy(&self) -> &TriagePolicy {
        &self.policy
    }

    /// Whether remediation runs in dry-run mode.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Read the audit source and raise an alert for every failed control.
    ///
    /// Returns the number of alerts collected. A missing, unreadable or
    /// malformed source is recovered locally: it logs a warning and
    /// yields zero alerts. Re-invocation replaces the alert list and
    /// clears both tables.
    pub fn collect_alerts(&mut self) -> usize {
        self.alerts = match collector::load_records(&self.audit_path) {
            Ok(records) => collector::build_alerts(&records, &self.policy),
            Err(err) => {
                warn!(path = %self.audit_path.display(), %err, "audit source unreadable, collecting no alerts");
                Vec::new()
            }
        };
        self.investigations.clear();
        self.remediations.clear();

        info!(count = self.alerts.len(), "alerts collected");
        self.alerts.len()
    }

    /// Investigate the alert at `index` (collection order) and store the
    /// report. Returns `None` for an out-of-range index.
    pub fn investigate_alert(&mut self, index: usize) -> Option<&InvestigationReport> {
        let alert = self.alerts.get_mut(index)?;
        let report = investigator::investigate(alert, &self.policy);
        let alert_id = report.alert_id.clone();
        self.investigations.insert(alert_id.clone(), report);
        self.investigations.get(&alert_id)
    }

    /// Apply remediation to the alert at `index`, using its stored
    /// investigation report. Returns `None` if the index is out of range
    /// or the alert has not been investigated yet.
    pub fn apply_remediation(&mut self, index: usize) -> Option<&RemediationResult> {
        let alert = self.alerts.get_mut(index)?;
        let report = self.investigations.get(&alert.alert_id)?.clone();
        let result = remediation::apply(
            alert,
            &report,
            &self.policy,
            self.backend.as_ref(),
            self.dry_run,
        );
        let alert_id = alert.alert_id.clone();
        self.remediations.insert(alert_id.clone(), result);
        self.remediations.get(&alert_id)
    }

    /// Run investigation and remediation over every collected alert, in
    /// collection order, and return the aggregate counts.
    pub fn process_all_alerts(&mut self) -> TriageStats {
        let mut stats = TriageStats {
            total_alerts: self.alerts.len(),
            ..TriageStats::default()
        };

        for index in 0..self.alerts.len() {
            self.investigate_alert(index);
            stats.investigated += 1;
            self.apply_remediation(index);

            let alert = &self.alerts[index];
            if alert.false_positive {
                stats.false_positives += 1;
            } else if alert.remediation_applied {
                stats.remediated += 1;
            } else if alert.escalated {
                stats.escalated += 1;
            }
        }

        info!(
            total = stats.total_alerts,
            remediated = stats.remediated,
            escalated = stats.escalated,
            false_positives = stats.false_positives,
            "triage pass complete"
        );
        stats
    }

    /// Close every alert that was remediated or classified as a false
    /// positive. Escalated alerts stay open for human action. Returns
    /// the number of alerts closed.
    pub fn close_resolved_alerts(&mut self) -> usize {
        let mut closed = 0;
        for alert in &mut self.alerts {
            if alert.alert_status.is_terminal() {
                continue;
            }
            if alert.remediation_applied || alert.false_positive {
                alert.alert_status = AlertStatus::Closed;
                closed += 1;
            }
        }

        info!(closed, "resolved alerts closed");
        closed
    }

    /// Write the remediation log artifact and return its path.
    pub fn generate_remediation_log(&self) -> Result<PathBuf, ReportError> {
        reporter::write_remediation_log(
            &self.output_dir,
            self.dry_run,
            &self.alerts,
            &self.investigations,
            &self.remediations,
        )
    }

    /// Write the summary report artifact and return its path.
    pub fn generate_summary_report(&self) -> Result<PathBuf, ReportError> {
        reporter::write_summary_report(
            &self.output_dir,
            self.dry_run,
            &self.alerts,
            &self.investigations,
            &self.remediations,
        )
    }

    /// The directory report artifacts are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
