use axum::routing::get;
use axum::{Extension, Router};

use crate::handlers::privacy_handlers::{check_email, privacy_policy_check, request_deletion};
use crate::state::AppState;

pub fn privacy_routes(state: AppState) -> Router {
    Router::new()
        .route("/check_email", get(check_email))
        .route("/request_deletion", get(request_deletion))
        .route("/privacy_policy_check", get(privacy_policy_check))
        .layer(Extension(state))
}
