use axum::{
    routing::{get, post},
    Router,
};

use crate::prediction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/job-titles", get(handlers::handle_job_titles))
        .route("/predictsalary", post(handlers::handle_predict))
        .with_state(state)
}
