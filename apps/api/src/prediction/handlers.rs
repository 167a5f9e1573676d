//! Axum route handlers for the prediction API.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::prediction::{PredictionRequest, PredictionResponse};
use crate::prediction::adjustment::adjust_salary;
use crate::prediction::features::assemble_features;
use crate::prediction::titles::JOB_TITLES;
use crate::prediction::validation::validate_request;
use crate::state::AppState;

/// GET /
pub async fn handle_root() -> Json<Value> {
    Json(json!({ "message": "Salary Prediction API Running 🚀" }))
}

/// GET /job-titles
/// Discovery endpoint: the fixed allow-list clients may submit.
pub async fn handle_job_titles() -> Json<Value> {
    Json(json!({ "job_titles": JOB_TITLES }))
}

/// POST /predictsalary
///
/// Validate → assemble features → predict (log1p units) → invert the log
/// transform → apply the salary adjustment heuristic.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(req): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, AppError> {
    validate_request(&req)?;

    let features = assemble_features(&state.encoder, state.vectorizer.as_deref(), &req);
    let log_salary = state.model.predict_log_salary(&features)?;
    let raw_salary = log_salary.exp_m1();

    let adjusted = adjust_salary(raw_salary, req.experience, &req.work_type, &req.job_title);
    Ok(Json(PredictionResponse {
        predicted_salary: adjusted.predicted_salary,
        lower_range: adjusted.lower_range,
        upper_range: adjusted.upper_range,
    }))
}
