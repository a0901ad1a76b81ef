use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::answers::AnswerSet;
use super::service::AuditService;

/// Audit, preview, and catalog endpoints.
pub fn audit_router(service: Arc<AuditService>) -> Router {
    Router::new()
        .route("/api/v1/audit", post(audit_handler))
        .route("/api/v1/audit/preview", post(preview_handler))
        .route("/api/v1/rules", get(rules_handler))
        .route(
            "/api/v1/questions",
            get(questions_handler).post(questions_for_answers_handler),
        )
        .with_state(service)
}

pub(crate) async fn audit_handler(
    State(service): State<Arc<AuditService>>,
    axum::Json(answers): axum::Json<AnswerSet>,
) -> Response {
    let result = service.audit(&answers);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn preview_handler(
    State(service): State<Arc<AuditService>>,
    axum::Json(answers): axum::Json<AnswerSet>,
) -> Response {
    let preview = service.preview(&answers);
    (StatusCode::OK, axum::Json(preview)).into_response()
}

pub(crate) async fn rules_handler(State(service): State<Arc<AuditService>>) -> Response {
    let rules = service.rules();
    let payload = json!({
        "count": rules.len(),
        "rules": rules,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn questions_handler(State(service): State<Arc<AuditService>>) -> Response {
    let steps = service.questions(&AnswerSet::default());
    (StatusCode::OK, axum::Json(json!({ "steps": steps }))).into_response()
}

pub(crate) async fn questions_for_answers_handler(
    State(service): State<Arc<AuditService>>,
    axum::Json(answers): axum::Json<AnswerSet>,
) -> Response {
    let steps = service.questions(&answers);
    (StatusCode::OK, axum::Json(json!({ "steps": steps }))).into_response()
}
