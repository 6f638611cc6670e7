//! Investigation findings for one alert.

use serde::{Deserialize, Serialize};

/// Evidence trail gathered for one alert.
///
/// `logs` is append-only and must carry the alert's evidence, timestamp
/// and expected/actual values verbatim so the remediation log alone can
/// reconstruct the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestigationReport {
    /// Alert this report belongs to.
    pub alert_id: String,
    /// Severity label at investigation time.
    pub severity: String,
    /// Where the finding came from.
    pub source: String,
    /// Ordered evidence trail.
    pub logs: Vec<String>,
    /// Endpoints implicated by the finding, if any.
    pub endpoints: Vec<String>,
    /// Related user activity, if any.
    pub user_activity: Vec<String>,
    /// Whether the finding looks inconclusive rather than a violation.
    pub is_false_positive: bool,
    /// Which indicator phrase matched, when `is_false_positive` is set.
    pub false_positive_reason: Option<String>,
}
