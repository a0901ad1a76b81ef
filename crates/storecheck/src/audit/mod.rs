//! App store compliance audit: answer model, rule catalog, and scoring engine.

pub mod answers;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod questionnaire;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{AnswerError, AnswerKind, AnswerSet, AnswerValue, QuestionId};
pub use catalog::{find_rule, list_rules, Rule, RuleView};
pub use domain::{Monetization, PermissionTiming, Platform, Severity, YesNo};
pub use engine::{evaluate, AuditEngine, AuditResult, Issue};
pub use questionnaire::{
    outline, pending_questions, QuestionOutline, QuestionnaireStep, StepOutline,
};
pub use report::{AuditPreview, AuditSummary, IssueCounts, ScoreBand};
pub use router::audit_router;
pub use service::AuditService;
