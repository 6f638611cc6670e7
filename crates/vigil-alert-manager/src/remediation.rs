//! Remediation action selection and execution.
//!
//! The actual policy mutation is behind [`RemediationBackend`] so live
//! deployments can plug in a real tenant API client and tests can plug
//! in a failing one. The shipped [`PolicyBackend`] performs no external
//! mutation; "live" mode only changes wording and result metadata.

use thiserror::Error;
use tracing::{debug, info, warn};
use vigil_alert_types::{
    Alert, AlertStatus, InvestigationReport, RemediationAction, RemediationResult,
};

use crate::policy::TriagePolicy;

/// Failure raised by a remediation backend.
#[derive(Debug, Error)]
pub enum RemediationError {
    /// The backend could not apply the change.
    #[error("remediation backend error: {0}")]
    Backend(String),
}

/// Executes the selected remediation against an external system.
pub trait RemediationBackend: Send {
    /// Apply a policy update for the alert's control.
    fn update_policy(&self, alert: &Alert) -> Result<(), RemediationError>;
}

/// Default backend: records the decision without mutating anything.
#[derive(Debug, Default)]
pub struct PolicyBackend;

impl RemediationBackend for PolicyBackend {
    fn update_policy(&self, _alert: &Alert) -> Result<(), RemediationError> {
        Ok(())
    }
}

/// Select the remediation action for an alert from the policy rule table.
pub fn determine_action(alert: &Alert, policy: &TriagePolicy) -> RemediationAction {
    let action = policy.action_for(&alert.control_id);
    debug!(alert_id = %alert.alert_id, control_id = %alert.control_id, %action, "remediation action determined");
    action
}

/// Execute remediation for one investigated alert.
///
/// False positives short-circuit with no action and are never escalated.
/// A successful policy update marks the alert `Remediated`; manual review
/// and backend failures escalate. Dry-run changes only wording and the
/// `dry_run` flag, never `action` or `success`.
pub fn apply(
    alert: &mut Alert,
    report: &InvestigationReport,
    policy: &TriagePolicy,
    backend: &dyn RemediationBackend,
    dry_run: bool,
) -> RemediationResult {
    if report.is_false_positive {
        let reason = report
            .false_positive_reason
            .as_deref()
            .unwrap_or("inconclusive evidence");
        info!(alert_id = %alert.alert_id, "skipping remediation for false positive");
        return RemediationResult {
            action: RemediationAction::None.as_str().to_string(),
            success: true,
            dry_run,
            details: format!("No remediation attempted: false positive ({reason})"),
        };
    }

    match determine_action(alert, policy) {
        RemediationAction::UpdatePolicy => apply_policy_update(alert, backend, dry_run),
        RemediationAction::ManualReview | RemediationAction::None => escalate(
            alert,
            RemediationAction::ManualReview,
            format!(
                "Control {} requires manual review; no safe automated remediation",
                alert.control_id
            ),
            dry_run,
        ),
    }
}

fn apply_policy_update(
    alert: &mut Alert,
    backend: &dyn RemediationBackend,
    dry_run: bool,
) -> RemediationResult {
    if !dry_run {
        if let Err(err) = backend.update_policy(alert) {
            warn!(alert_id = %alert.alert_id, %err, "policy update failed, escalating");
            return escalate(
                alert,
                RemediationAction::UpdatePolicy,
                format!("Policy update failed for control {}: {err}", alert.control_id),
                dry_run,
            );
        }
    }

    let details = if dry_run {
        format!(
            "[DRY RUN] Would update tenant policy for control {}",
            alert.control_id
        )
    } else {
        format!("Updated tenant policy for control {}", alert.control_id)
    };

    alert.remediation_applied = true;
    alert.remediation_action = Some(RemediationAction::UpdatePolicy);
    alert.advance_status(AlertStatus::Remediated);
    info!(alert_id = %alert.alert_id, dry_run, "policy update remediation applied");

    RemediationResult {
        action: RemediationAction::UpdatePolicy.as_str().to_string(),
        success: true,
        dry_run,
        details,
    }
}

fn escalate(
    alert: &mut Alert,
    action: RemediationAction,
    details: String,
    dry_run: bool,
) -> RemediationResult {
    alert.escalated = true;
    alert.advance_status(AlertStatus::Escalated);
    info!(alert_id = %alert.alert_id, "alert escalated");

    RemediationResult {
        action: action.as_str().to_string(),
        success: false,
        dry_run,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investigator::investigate;
    use test_case::test_case;
    use vigil_alert_types::{AuditRecord, AuditStatus};

    struct FailingBackend;

    impl RemediationBackend for FailingBackend {
        fn update_policy(&self, _alert: &Alert) -> Result<(), RemediationError> {
            Err(RemediationError::Backend("tenant API unreachable".to_string()))
        }
    }

    fn alert(control_id: &str, evidence: &str) -> Alert {
        let record = AuditRecord {
            control_id: control_id.to_string(),
            title: "Test control".to_string(),
            severity: "High".to_string(),
            expected: "Compliant".to_string(),
            actual: "Non-compliant".to_string(),
            status: AuditStatus::Fail,
            evidence: evidence.to_string(),
            reference: "Test".to_string(),
            timestamp: "2025-12-11T10:00:00".to_string(),
        };
        Alert::from_record(1, &record)
    }

    fn investigated(control_id: &str, evidence: &str) -> (Alert, InvestigationReport) {
        let mut a = alert(control_id, evidence);
        let report = investigate(&mut a, &TriagePolicy::default());
        (a, report)
    }

    #[test_case("CIS-AUTH-1", RemediationAction::UpdatePolicy)]
    #[test_case("CIS-PASSWORD-1", RemediationAction::UpdatePolicy)]
    #[test_case("CIS-SHARING-1", RemediationAction::UpdatePolicy)]
    #[test_case("CIS-EXTERNAL-1", RemediationAction::UpdatePolicy)]
    #[test_case("CIS-AUDIT-1", RemediationAction::UpdatePolicy)]
    #[test_case("CIS-ADMIN-1", RemediationAction::ManualReview)]
    #[test_case("CIS-ROLE-1", RemediationAction::ManualReview)]
    #[test_case("CIS-CUSTOM-1", RemediationAction::ManualReview)]
    fn control_id_keywords_map_to_actions(control_id: &str, expected: RemediationAction) {
        let a = alert(control_id, "Policy violation");
        assert_eq!(determine_action(&a, &TriagePolicy::default()), expected);
    }

    #[test]
    fn false_positive_short_circuits_without_escalation() {
        let (mut a, report) = investigated("CIS-ADMIN-1", "Not connected to service");
        let result = apply(
            &mut a,
            &report,
            &TriagePolicy::default(),
            &PolicyBackend,
            true,
        );

        assert_eq!(result.action, "none");
        assert!(result.success);
        assert!(result.details.to_lowercase().contains("false positive"));
        assert!(!a.escalated);
        assert_ne!(a.alert_status, AlertStatus::Escalated);
    }

    #[test]
    fn policy_update_dry_run_wording() {
        let (mut a, report) = investigated("CIS-AUTH-1", "MFA disabled");
        let result = apply(
            &mut a,
            &report,
            &TriagePolicy::default(),
            &PolicyBackend,
            true,
        );

        assert!(result.success);
        assert!(result.dry_run);
        assert!(result.details.starts_with("[DRY RUN]"));
        assert!(result.details.contains("CIS-AUTH-1"));
        assert!(a.remediation_applied);
        assert_eq!(a.remediation_action, Some(RemediationAction::UpdatePolicy));
        assert_eq!(a.alert_status, AlertStatus::Remediated);
    }

    #[test]
    fn policy_update_live_wording() {
        let (mut a, report) = investigated("CIS-AUTH-1", "MFA disabled");
        let result = apply(
            &mut a,
            &report,
            &TriagePolicy::default(),
            &PolicyBackend,
            false,
        );

        assert!(result.success);
        assert!(!result.dry_run);
        assert!(!result.details.contains("[DRY RUN]"));
        assert!(result.details.contains("CIS-AUTH-1"));
    }

    #[test]
    fn dry_run_and_live_agree_on_action_and_success() {
        let (mut dry, dry_report) = investigated("CIS-AUTH-1", "MFA disabled");
        let (mut live, live_report) = investigated("CIS-AUTH-1", "MFA disabled");
        let policy = TriagePolicy::default();

        let dry_result = apply(&mut dry, &dry_report, &policy, &PolicyBackend, true);
        let live_result = apply(&mut live, &live_report, &policy, &PolicyBackend, false);

        assert_eq!(dry_result.action, live_result.action);
        assert_eq!(dry_result.success, live_result.success);
        assert_ne!(dry_result.details, live_result.details);
    }

    #[test]
    fn manual_review_always_escalates() {
        let (mut a, report) = investigated("CIS-ADMIN-1", "Found 8 Global Administrators");
        let result = apply(
            &mut a,
            &report,
            &TriagePolicy::default(),
            &PolicyBackend,
            true,
        );

        assert_eq!(result.action, "manual_review");
        assert!(!result.success);
        assert!(a.escalated);
        assert_eq!(a.alert_status, AlertStatus::Escalated);
        assert!(!a.remediation_applied);
    }

    #[test]
    fn backend_failure_escalates_in_live_mode() {
        let (mut a, report) = investigated("CIS-AUTH-1", "MFA disabled");
        let result = apply(
            &mut a,
            &report,
            &TriagePolicy::default(),
            &FailingBackend,
            false,
        );

        assert!(!result.success);
        assert!(result.details.contains("tenant API unreachable"));
        assert!(a.escalated);
        assert_eq!(a.alert_status, AlertStatus::Escalated);
        assert!(!a.remediation_applied);
    }
}
