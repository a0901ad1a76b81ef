use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers::AnswerSet;
use super::catalog::{list_rules, Rule};
use super::domain::Severity;

pub const BASE_SCORE: i32 = 100;

/// Realized instance of a rule that fired for one answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn from_rule(rule: &Rule) -> Self {
        Self {
            id: rule.id.to_string(),
            severity: rule.severity,
            message: rule.message.to_string(),
        }
    }
}

/// Score in `0..=100` plus issues ordered critical, high, minor (catalog order within a band).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub score: u8,
    pub issues: Vec<Issue>,
}

/// Evaluate every rule of `catalog` against `answers`.
pub fn evaluate(answers: &AnswerSet, catalog: &[Rule]) -> AuditResult {
    let mut running = BASE_SCORE;
    let mut issues = Vec::new();

    for rule in catalog {
        if rule.matches(answers) {
            debug!(rule = rule.id, severity = %rule.severity, penalty = rule.penalty, "rule triggered");
            running += rule.penalty;
            issues.push(Issue::from_rule(rule));
        }
    }

    // sort_by_key is stable, so ties keep catalog order.
    issues.sort_by_key(|issue| issue.severity.rank());

    let score = running.clamp(0, BASE_SCORE) as u8;
    debug!(score, triggered = issues.len(), "audit evaluated");

    AuditResult { score, issues }
}

/// Stateless evaluator bound to a rule catalog.
#[derive(Debug, Clone, Copy)]
pub struct AuditEngine {
    catalog: &'static [Rule],
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new(list_rules())
    }
}

impl AuditEngine {
    pub fn new(catalog: &'static [Rule]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'static [Rule] {
        self.catalog
    }

    pub fn audit(&self, answers: &AnswerSet) -> AuditResult {
        evaluate(answers, self.catalog)
    }

    /// Rules whose predicate holds, in catalog order.
    pub fn triggered(&self, answers: &AnswerSet) -> Vec<&'static Rule> {
        self.catalog
            .iter()
            .filter(|rule| rule.matches(answers))
            .collect()
    }
}
