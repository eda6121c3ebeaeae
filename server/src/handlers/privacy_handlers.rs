use axum::{extract::Query, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use policy_service_cli::pipeline::analyze_policy_input;

use crate::state::AppState;
use crate::templates;

#[derive(Deserialize)]
pub struct CheckEmailParams {
    pub email: String,
}

/// GET /check_email?email=
pub async fn check_email(
    Extension(state): Extension<AppState>,
    Query(params): Query<CheckEmailParams>,
) -> impl IntoResponse {
    match state.breach.lookup(&params.email).await {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({
                "message": format!("Your email was found in {} breaches.", report.found),
                "result": report.result,
            })),
        ),
        Err(err) => {
            error!(error = %err, "breach lookup failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
        }
    }
}

#[derive(Deserialize)]
pub struct RequestDeletionParams {
    pub platform: String,
}

/// GET /request_deletion?platform=
pub async fn request_deletion(Query(params): Query<RequestDeletionParams>) -> impl IntoResponse {
    match templates::find(&params.platform) {
        Some(template) => Json(json!(template)),
        // A miss is informational, not an HTTP error.
        None => Json(json!({ "error": "Platform not supported." })),
    }
}

#[derive(Deserialize)]
pub struct PolicyCheckParams {
    pub policy_text: String,
}

/// GET /privacy_policy_check?policy_text=
///
/// Accepts either a URL or literal policy text. Always answers 200 with a
/// complete report; fetch and model failures are embedded in the report.
pub async fn privacy_policy_check(
    Extension(state): Extension<AppState>,
    Query(params): Query<PolicyCheckParams>,
) -> impl IntoResponse {
    let report = analyze_policy_input(&params.policy_text, state.model.as_ref()).await;
    Json(report)
}
