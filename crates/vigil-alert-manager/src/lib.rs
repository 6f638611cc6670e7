//! Alert lifecycle management for compliance audits.
//!
//! Turns failing control evaluations into triaged, investigated and,
//! where safely automatable, remediated alerts with a durable audit
//! trail. The [`AlertManager`] orchestrates the full pass:
//! collect → investigate → remediate → close → report.

mod collector;
mod investigator;
mod manager;
mod policy;
mod remediation;
mod reporter;

pub use investigator::investigate;
pub use manager::AlertManager;
pub use policy::{ActionRule, TriagePolicy};
pub use remediation::{
    determine_action, PolicyBackend, RemediationBackend, RemediationError,
};
pub use reporter::{ReportError, SeverityBucket, TriageStats};

// Re-export the core types alongside the manager.
pub use vigil_alert_types::{
    Alert, AlertStatus, AuditRecord, AuditStatus, InvestigationReport,
    RemediationAction, RemediationResult,
};
