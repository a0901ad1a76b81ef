use std::sync::Arc;

use tracing::info;

use super::answers::AnswerSet;
use super::catalog::RuleView;
use super::engine::{AuditEngine, AuditResult};
use super::questionnaire::{outline, StepOutline};
use super::report::{AuditPreview, AuditSummary};
use crate::config::AuditConfig;

/// Entry point shared by the HTTP routes and the CLI.
#[derive(Debug, Clone)]
pub struct AuditService {
    engine: AuditEngine,
    config: AuditConfig,
}

impl AuditService {
    pub fn new(engine: AuditEngine, config: AuditConfig) -> Self {
        Self { engine, config }
    }

    pub fn shared(config: AuditConfig) -> Arc<Self> {
        Arc::new(Self::new(AuditEngine::default(), config))
    }

    pub fn preview_per_severity(&self) -> usize {
        self.config.preview_per_severity
    }

    pub fn audit(&self, answers: &AnswerSet) -> AuditResult {
        let result = self.engine.audit(answers);
        let summary = AuditSummary::from_result(&result);
        info!(
            score = summary.score,
            critical = summary.counts.critical,
            high = summary.counts.high,
            minor = summary.counts.minor,
            answered = answers.answered_count(),
            "audit completed"
        );
        result
    }

    pub fn preview(&self, answers: &AnswerSet) -> AuditPreview {
        let result = self.audit(answers);
        AuditPreview::from_result(&result, self.config.preview_per_severity)
    }

    pub fn rules(&self) -> Vec<RuleView> {
        self.engine.catalog().iter().map(|rule| rule.view()).collect()
    }

    pub fn questions(&self, answers: &AnswerSet) -> Vec<StepOutline> {
        outline(answers)
    }
}

impl Default for AuditService {
    fn default() -> Self {
        Self::new(AuditEngine::default(), AuditConfig::default())
    }
}
