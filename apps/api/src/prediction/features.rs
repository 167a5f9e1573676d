//! Feature Assembler — builds the model input vector from a validated request.
//!
//! Column order is a training-time invariant:
//! `[experience | one-hot categorical block | optional TF-IDF block]`.
//! Reordering any block silently corrupts every prediction, so the offsets
//! here must stay in lockstep with the artifact widths checked at load time.

use crate::artifacts::encoder::OneHotEncoder;
use crate::artifacts::vectorizer::TfidfVectorizer;
use crate::models::prediction::PredictionRequest;

/// Sparse, fixed-width feature vector. Indices are strictly ascending;
/// absent positions read as 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    indices: Vec<usize>,
    values: Vec<f64>,
    width: usize,
}

impl FeatureVector {
    pub fn with_width(width: usize) -> Self {
        FeatureVector {
            indices: Vec::new(),
            values: Vec::new(),
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Value at position `i`, 0.0 when the position is not stored.
    pub fn get(&self, i: usize) -> f64 {
        match self.indices.binary_search(&i) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Appends a value. Indices must arrive in strictly ascending order;
    /// out-of-order or out-of-range pushes are a bug in the assembler.
    pub fn push(&mut self, index: usize, value: f64) {
        debug_assert!(index < self.width);
        debug_assert!(self.indices.last().map_or(true, |&last| index > last));
        self.indices.push(index);
        self.values.push(value);
    }

    #[cfg(test)]
    pub fn nonzero_len(&self) -> usize {
        self.indices.len()
    }
}

/// Grouped display qualifications mapped to the canonical training-time
/// category. Values absent from this table pass through unchanged.
const QUALIFICATION_GROUPS: &[(&str, &str)] = &[
    ("BCA/CSIT/BIT", "BCA"),
    ("B.Tech/BE", "B.Tech"),
    ("M.Tech/ME", "M.Tech"),
    ("B.Com/BBA", "B.Com"),
];

pub fn canonical_qualification(qualification: &str) -> &str {
    QUALIFICATION_GROUPS
        .iter()
        .find(|(display, _)| *display == qualification)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(qualification)
}

/// The request field feeding a given encoder column. Encoder columns are
/// validated against this set at artifact-load time, so the fallback arm is
/// unreachable in practice and encodes as an all-zero block if it ever fires.
fn column_value<'a>(req: &'a PredictionRequest, column: &str) -> &'a str {
    match column {
        "qualification" => canonical_qualification(&req.qualification),
        "work_type" => &req.work_type,
        "job_title" => &req.job_title,
        "role" => &req.role,
        _ => "",
    }
}

/// Assembles the full feature vector in training-time column order.
///
/// Categories the encoder has never seen produce an all-zero block for that
/// column (the encoder artifact's "ignore" unknown policy) — never an error.
pub fn assemble_features(
    encoder: &OneHotEncoder,
    vectorizer: Option<&TfidfVectorizer>,
    req: &PredictionRequest,
) -> FeatureVector {
    let text_width = vectorizer.map_or(0, |v| v.width());
    let mut features = FeatureVector::with_width(1 + encoder.width() + text_width);

    features.push(0, req.experience);

    let row: Vec<&str> = encoder
        .columns()
        .iter()
        .map(|c| column_value(req, c))
        .collect();
    for (index, value) in encoder.encode(&row) {
        features.push(1 + index, value);
    }

    if let Some(vectorizer) = vectorizer {
        let text = format!(
            "{} {} {}",
            req.job_description, req.skills, req.responsibilities
        );
        let offset = 1 + encoder.width();
        for (index, value) in vectorizer.vectorize(&text) {
            features.push(offset + index, value);
        }
    }

    features
}
