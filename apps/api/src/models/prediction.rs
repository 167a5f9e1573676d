use serde::{Deserialize, Serialize};

/// Body of `POST /predictsalary`. The free-text fields are only consumed
/// when the TF-IDF artifact is loaded; they default to empty so clients of
/// the no-text variant can omit them.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    pub experience: f64,
    pub qualification: String,
    pub work_type: String,
    pub job_title: String,
    pub role: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub responsibilities: String,
}

/// Adjusted point estimate plus the ±15% range, each rounded to 2 decimals.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub predicted_salary: f64,
    pub lower_range: f64,
    pub upper_range: f64,
}
