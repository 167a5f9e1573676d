//! Salary Adjuster — deterministic rescaling of the raw model output.
//!
//! Three multiplier tables: an experience step function, an exact-match
//! work-type table, and an ordered job-title keyword list. All thresholds
//! and factors are load-bearing; downstream consumers display the numbers
//! verbatim, so changing any entry is a behavioral break.

/// Point estimate plus the ±15% confidence range, all rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedSalary {
    pub predicted_salary: f64,
    pub lower_range: f64,
    pub upper_range: f64,
}

/// Work-type multipliers, case-sensitive exact match. Unknown → 1.0.
const WORK_TYPE_MULTIPLIERS: &[(&str, f64)] = &[
    ("Full-Time", 1.0),
    ("Part-Time", 0.55),
    ("Contract", 0.8),
    ("Temporary", 0.45),
    ("Intern", 0.25),
];

/// Job-title keyword multipliers, checked in order against the lower-cased
/// title; first match wins. The order is deliberate: seniority/discipline
/// keywords are checked before tester/qa, so "QA Engineer" resolves to the
/// engineer multiplier. Do not reorder without confirming intended semantics.
const JOB_TITLE_KEYWORDS: &[(&[&str], f64)] = &[
    (&["manager", "director"], 1.40),
    (&["architect"], 1.25),
    (&["scientist"], 1.15),
    (&["engineer"], 1.10),
    (&["developer"], 1.05),
    (&["analyst"], 0.90),
    (&["designer"], 0.85),
    (&["tester", "qa"], 0.80),
    (&["support", "technician"], 0.70),
];

/// Step function over years of experience. Boundary values belong to the
/// upper bucket (e.g. exactly 5.0 years → 1.0).
pub fn experience_factor(years: f64) -> f64 {
    if years < 1.0 {
        0.40
    } else if years < 3.0 {
        0.65
    } else if years < 5.0 {
        0.85
    } else if years < 8.0 {
        1.00
    } else {
        1.15
    }
}

pub fn work_type_multiplier(work_type: &str) -> f64 {
    WORK_TYPE_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == work_type)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

pub fn job_title_multiplier(job_title: &str) -> f64 {
    let title = job_title.to_lowercase();
    JOB_TITLE_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| title.contains(kw)))
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Applies all three multipliers to the raw (already exponentiated) model
/// output and derives the ±15% range.
pub fn adjust_salary(
    raw_salary: f64,
    experience: f64,
    work_type: &str,
    job_title: &str,
) -> AdjustedSalary {
    let adjusted = raw_salary
        * experience_factor(experience)
        * work_type_multiplier(work_type)
        * job_title_multiplier(job_title);
    let adjusted = round2(adjusted);

    AdjustedSalary {
        predicted_salary: adjusted,
        lower_range: round2(adjusted * 0.85),
        upper_range: round2(adjusted * 1.15),
    }
}
