use crate::infra::{load_answers, parse_severity};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use storecheck::audit::{
    pending_questions, AnswerSet, AuditPreview, AuditResult, AuditService, AuditSummary, Issue,
    Severity,
};
use storecheck::config::AppConfig;
use storecheck::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AuditArgs {
    /// JSON answer file (`-` reads stdin)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Only show the free preview (first issues of each severity)
    #[arg(long)]
    pub(crate) preview: bool,
    /// Override AUDIT_PREVIEW_PER_SEVERITY for this run
    #[arg(long)]
    pub(crate) per_severity: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// Only list rules of this severity (critical, high, minor)
    #[arg(long, value_parser = parse_severity)]
    pub(crate) severity: Option<Severity>,
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Answers already collected; marks applicability and progress
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Only list applicable questions that are still unanswered
    #[arg(long)]
    pub(crate) pending: bool,
    /// Print the outline as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let AuditArgs {
        answers,
        json,
        preview,
        per_severity,
    } = args;

    let mut config = AppConfig::load()?.audit;
    if let Some(limit) = per_severity {
        config.preview_per_severity = limit;
    }
    let service = AuditService::shared(config);
    let answers = load_answers(&answers)?;
    let result = service.audit(&answers);
    let today = Local::now().date_naive();

    match (preview, json) {
        (true, true) => {
            let preview = AuditPreview::from_result(&result, service.preview_per_severity());
            println!("{}", serde_json::to_string_pretty(&preview)?);
        }
        (false, true) => println!("{}", serde_json::to_string_pretty(&result)?),
        (true, false) => {
            let preview = AuditPreview::from_result(&result, service.preview_per_severity());
            print!("{}", render_preview(&preview, today));
        }
        (false, false) => print!("{}", render_audit(&result, today)),
    }

    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let rules: Vec<_> = AuditService::default()
        .rules()
        .into_iter()
        .filter(|rule| args.severity.map_or(true, |severity| rule.severity == severity))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("Review rules ({})", rules.len());
    for rule in &rules {
        println!(
            "- {:<30} {:<9} {:>4}  {}",
            rule.id,
            rule.severity.key(),
            rule.penalty,
            rule.message
        );
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let answers = match args.answers {
        Some(path) => load_answers(&path)?,
        None => AnswerSet::default(),
    };

    if args.pending {
        let pending = pending_questions(&answers);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&pending)?);
        } else if pending.is_empty() {
            println!("All applicable questions are answered");
        } else {
            println!("Pending questions ({})", pending.len());
            for question in pending {
                println!("- {} ({})", question, question.kind());
            }
        }
        return Ok(());
    }

    let steps = AuditService::default().questions(&answers);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    for step in &steps {
        println!("\nStep {}: {}", step.number, step.label);
        for question in &step.questions {
            let marker = match (question.applicable, question.answered) {
                (_, true) => "x",
                (true, false) => " ",
                (false, false) => "-",
            };
            println!("  [{}] {} ({})", marker, question.key, question.kind);
        }
    }
    Ok(())
}

pub(crate) fn render_audit(result: &AuditResult, today: NaiveDate) -> String {
    let summary = AuditSummary::from_result(result);
    let mut out = header(&summary, today);
    out.push_str(&render_issues(&result.issues));
    out
}

pub(crate) fn render_preview(preview: &AuditPreview, today: NaiveDate) -> String {
    let mut out = header(&preview.summary, today);
    out.push_str(&render_issues(&preview.issues));
    if preview.hidden_count > 0 {
        out.push_str(&format!(
            "\n{} more issue(s) hidden in the preview\n",
            preview.hidden_count
        ));
    }
    out
}

fn header(summary: &AuditSummary, today: NaiveDate) -> String {
    format!(
        "Store compliance audit ({today})\nScore: {}/100 ({})\nIssues: {} critical, {} high risk, {} minor\n",
        summary.score,
        summary.band_label,
        summary.counts.critical,
        summary.counts.high,
        summary.counts.minor,
    )
}

fn render_issues(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "\nNo issues found\n".to_string();
    }

    let mut out = String::new();
    for severity in Severity::ordered() {
        let mut group = issues.iter().filter(|issue| issue.severity == severity).peekable();
        if group.peek().is_none() {
            continue;
        }
        out.push_str(&format!("\n{}\n", severity.label()));
        for issue in group {
            out.push_str(&format!("- [{}] {}\n", issue.id, issue.message));
        }
    }
    out
}
