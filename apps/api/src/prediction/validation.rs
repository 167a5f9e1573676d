//! Pure request validation, run before any feature work.
//!
//! Every check returns an explicit error instead of raising mid-pipeline, so
//! the adjustment and encoding code never see a malformed request.

use crate::errors::AppError;
use crate::models::prediction::PredictionRequest;
use crate::prediction::titles::{is_known_title, JOB_TITLES};

pub fn validate_request(req: &PredictionRequest) -> Result<(), AppError> {
    if !req.experience.is_finite() || req.experience < 0.0 {
        return Err(AppError::Validation(
            "experience must be a non-negative number of years".to_string(),
        ));
    }

    for (field, value) in [
        ("qualification", &req.qualification),
        ("work_type", &req.work_type),
        ("job_title", &req.job_title),
        ("role", &req.role),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} must not be empty")));
        }
    }

    if !is_known_title(&req.job_title) {
        return Err(AppError::UnprocessableEntity(format!(
            "Invalid job_title '{}'. Valid job titles: {}",
            req.job_title,
            JOB_TITLES.join(", ")
        )));
    }

    Ok(())
}
