//! Core types for the compliance alert lifecycle.
//!
//! Shared between the collector, investigator, remediation executor and
//! reporter. Pure data definitions with serde support; no I/O.

mod action;
mod alert;
mod investigation;
mod record;
mod remediation;
mod status;

pub use action::RemediationAction;
pub use alert::Alert;
pub use investigation::InvestigationReport;
pub use record::{AuditRecord, AuditStatus};
pub use remediation::RemediationResult;
pub use status::AlertStatus;
