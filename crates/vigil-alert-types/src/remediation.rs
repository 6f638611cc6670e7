//! Remediation outcome for one alert.

use serde::{Deserialize, Serialize};

/// Outcome of the remediation step for one alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationResult {
    /// Name of the action taken, or `"none"`.
    pub action: String,
    /// Whether the step completed without error.
    pub success: bool,
    /// Execution mode in effect; dry-run results differ from live ones
    /// only in wording, never in `action` or `success`.
    pub dry_run: bool,
    /// Human-readable explanation, prefixed `[DRY RUN]` when simulated.
    pub details: String,
}
