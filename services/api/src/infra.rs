use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use storecheck::audit::{AnswerSet, Severity};
use storecheck::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read an answer file; `-` reads standard input.
pub(crate) fn load_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    parse_answers(&raw)
}

pub(crate) fn parse_answers(raw: &str) -> Result<AnswerSet, AppError> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn parse_severity(value: &str) -> Result<Severity, String> {
    Severity::ordered()
        .into_iter()
        .find(|severity| severity.key().eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| format!("unknown severity '{value}' (expected critical, high, or minor)"))
}
