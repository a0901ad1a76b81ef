use axum::response::Response;
use serde_json::{json, Value};

use crate::audit::{AnswerSet, AuditResult, Issue, QuestionId, Severity};

pub(super) fn answers(value: Value) -> AnswerSet {
    serde_json::from_value(value).expect("answer payload deserializes")
}

/// Android app answering every question in the compliant direction.
pub(super) fn compliant_android() -> AnswerSet {
    answers(json!({
        "platform": "android",
        "appType": "utility",
        "targetRegions": ["US"],
        "isForKids": "no",
        "collectsData": "no",
        "permissionTiming": "context",
        "usesLocation": "no",
        "usesCamera": "no",
        "usesMicrophone": "no",
        "usesHealthData": "no",
        "hasUGC": "no",
        "hasContactInfo": "yes",
        "socialLogin": "no",
        "monetization": "free",
        "apiLevel": 24,
        "targetSdkVersion": 34,
        "hasScreenshots": "yes",
        "screenshotsReal": "yes",
        "appDescAccurate": "yes",
        "ageRatingDeclared": "yes"
    }))
}

pub(super) fn privacy_gap_ios() -> AnswerSet {
    answers(json!({
        "platform": "ios",
        "collectsData": "yes",
        "hasPrivacyPolicy": "no"
    }))
}

pub(super) fn ids(result: &AuditResult) -> Vec<&str> {
    result.issues.iter().map(|issue| issue.id.as_str()).collect()
}

pub(super) fn severities(issues: &[Issue]) -> Vec<Severity> {
    issues.iter().map(|issue| issue.severity).collect()
}

pub(super) fn yes_no_questions() -> Vec<QuestionId> {
    QuestionId::ordered()
        .into_iter()
        .filter(|question| question.kind() == crate::audit::AnswerKind::YesNo)
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
