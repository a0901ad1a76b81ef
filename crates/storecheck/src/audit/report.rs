use serde::Serialize;

use super::domain::Severity;
use super::engine::{AuditResult, Issue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Fair,
    Poor,
    Failing,
}

impl ScoreBand {
    pub const fn for_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Fair,
            40..=59 => Self::Poor,
            _ => Self::Failing,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Ready for review",
            Self::Fair => "Needs attention",
            Self::Poor => "At risk of rejection",
            Self::Failing => "Likely rejection",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub critical: usize,
    pub high: usize,
    pub minor: usize,
}

impl IssueCounts {
    pub fn tally(issues: &[Issue]) -> Self {
        issues
            .iter()
            .fold(Self::default(), |mut counts, issue| {
                match issue.severity {
                    Severity::Critical => counts.critical += 1,
                    Severity::High => counts.high += 1,
                    Severity::Minor => counts.minor += 1,
                }
                counts
            })
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Minor => self.minor,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.minor
    }
}

/// Headline numbers for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub score: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub counts: IssueCounts,
    pub total_issues: usize,
}

impl AuditSummary {
    pub fn from_result(result: &AuditResult) -> Self {
        let band = ScoreBand::for_score(result.score);
        let counts = IssueCounts::tally(&result.issues);
        Self {
            score: result.score,
            band,
            band_label: band.label(),
            counts,
            total_issues: result.issues.len(),
        }
    }
}

/// Limited view of a result: the first `per_severity` issues of each band, in result order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditPreview {
    pub summary: AuditSummary,
    pub issues: Vec<Issue>,
    pub hidden_count: usize,
}

impl AuditPreview {
    pub fn from_result(result: &AuditResult, per_severity: usize) -> Self {
        let issues: Vec<Issue> = Severity::ordered()
            .into_iter()
            .flat_map(|severity| {
                result
                    .issues
                    .iter()
                    .filter(move |issue| issue.severity == severity)
                    .take(per_severity)
            })
            .cloned()
            .collect();

        Self {
            summary: AuditSummary::from_result(result),
            hidden_count: result.issues.len() - issues.len(),
            issues,
        }
    }
}
