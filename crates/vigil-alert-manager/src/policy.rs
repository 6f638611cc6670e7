//! Triage policy tables.
//!
//! Severity weights, false-positive indicator phrases and the
//! control-id keyword rules live here as plain data owned by the
//! manager, so a deployment or a test can swap any of them without
//! touching the decision code.

use serde::{Deserialize, Serialize};
use vigil_alert_types::RemediationAction;

/// One keyword rule: if `keyword` occurs in a control id, `action` is
/// selected. Rules are evaluated in order; the first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRule {
    /// Substring matched case-sensitively against the control id.
    pub keyword: String,
    /// Action selected when the keyword matches.
    pub action: RemediationAction,
}

impl ActionRule {
    /// Create a rule.
    pub fn new(keyword: impl Into<String>, action: RemediationAction) -> Self {
        Self {
            keyword: keyword.into(),
            action,
        }
    }
}

/// Policy tables driving triage decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriagePolicy {
    /// Severity label → processing weight. Unknown labels weigh 0.
    pub severity_weights: Vec<(String, u32)>,
    /// Phrases in evidence that signal an inconclusive check rather
    /// than a genuine violation. Matched case-insensitively.
    ///
    /// Deliberately coarse: it trades recall for precision and can
    /// misfire on evidence that happens to contain a phrase like
    /// "unknown" in an unrelated context. Kept as-is for compatibility.
    pub false_positive_indicators: Vec<String>,
    /// Priority-ordered keyword rules for remediation selection.
    pub action_rules: Vec<ActionRule>,
    /// Action when no rule matches.
    pub default_action: RemediationAction,
}

impl Default for TriagePolicy {
    fn default() -> Self {
        Self {
            severity_weights: vec![
                ("Critical".to_string(), 100),
                ("High".to_string(), 75),
                ("Medium".to_string(), 50),
                ("Low".to_string(), 25),
            ],
            false_positive_indicators: vec![
                "not connected".to_string(),
                "module not found".to_string(),
                "manual review required".to_string(),
                "unknown".to_string(),
            ],
            action_rules: vec![
                ActionRule::new("AUTH", RemediationAction::UpdatePolicy),
                ActionRule::new("PASSWORD", RemediationAction::UpdatePolicy),
                ActionRule::new("SHARING", RemediationAction::UpdatePolicy),
                ActionRule::new("EXTERNAL", RemediationAction::UpdatePolicy),
                ActionRule::new("AUDIT", RemediationAction::UpdatePolicy),
                ActionRule::new("ADMIN", RemediationAction::ManualReview),
                ActionRule::new("ROLE", RemediationAction::ManualReview),
            ],
            default_action: RemediationAction::ManualReview,
        }
    }
}

impl TriagePolicy {
    /// Processing weight for a severity label.
    pub fn severity_weight(&self, severity: &str) -> u32 {
        self.severity_weights
            .iter()
            .find(|(label, _)| label == severity)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }

    /// First false-positive indicator found in the evidence, if any.
    pub fn false_positive_match(&self, evidence: &str) -> Option<&str> {
        let evidence = evidence.to_lowercase();
        self.false_positive_indicators
            .iter()
            .find(|indicator| evidence.contains(indicator.as_str()))
            .map(String::as_str)
    }

    /// Remediation action for a control id.
    pub fn action_for(&self, control_id: &str) -> RemediationAction {
        self.action_rules
            .iter()
            .find(|rule| control_id.contains(&rule.keyword))
            .map(|rule| rule.action)
            .unwrap_or(self.default_action)
    }
}
