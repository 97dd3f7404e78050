pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::enhance::handlers as enhance;
use crate::parsing::handlers as parsing;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Import & parse
        .route("/api/v1/resume/import", post(parsing::handle_import))
        .route("/api/v1/resume/parse", post(parsing::handle_parse_text))
        .route("/api/v1/resume/score", post(enhance::handle_score))
        // Enhancement
        .route(
            "/api/v1/enhance/summary",
            post(enhance::handle_enhance_summary),
        )
        .route("/api/v1/enhance/bullet", post(enhance::handle_enhance_bullet))
        .route("/api/v1/enhance/skills", post(enhance::handle_suggest_skills))
        .route(
            "/api/v1/enhance/action-verbs",
            get(enhance::handle_action_verbs),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
