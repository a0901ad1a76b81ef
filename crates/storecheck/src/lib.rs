//! Deterministic app store compliance checklist.
//!
//! [`audit`] holds the answer model, the fixed rule catalog and the scoring engine.
//! The remaining modules carry the runtime concerns shared by the service binary.

pub mod audit;
pub mod config;
pub mod error;
pub mod telemetry;

pub use audit::{evaluate, list_rules, AnswerSet, AuditEngine, AuditResult, Issue, Severity};
