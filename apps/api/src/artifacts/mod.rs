//! Pretrained model artifacts, loaded once at startup.
//!
//! `ARTIFACT_DIR` must hold `encoder.json` and `model.json`; `tfidf.json` is
//! optional and selects the free-text variant when present. Any missing or
//! malformed required artifact aborts startup — the service never runs with
//! a partial model.

pub mod encoder;
pub mod model;
pub mod vectorizer;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use encoder::OneHotEncoder;
use model::GradientBoostedTrees;
use vectorizer::TfidfVectorizer;

#[derive(Debug)]
pub struct ModelArtifacts {
    pub encoder: OneHotEncoder,
    pub vectorizer: Option<TfidfVectorizer>,
    pub model: GradientBoostedTrees,
}

impl ModelArtifacts {
    /// Width of the feature vector the assembler will produce:
    /// experience + one-hot block + optional TF-IDF block.
    pub fn feature_width(&self) -> usize {
        1 + self.encoder.width() + self.vectorizer.as_ref().map_or(0, TfidfVectorizer::width)
    }
}

pub fn load_artifacts(dir: &Path) -> Result<ModelArtifacts> {
    let encoder: OneHotEncoder = load_json(&dir.join("encoder.json"))?;
    encoder.validate()?;

    let tfidf_path = dir.join("tfidf.json");
    let vectorizer: Option<TfidfVectorizer> = if tfidf_path.exists() {
        let v: TfidfVectorizer = load_json(&tfidf_path)?;
        v.validate()?;
        Some(v)
    } else {
        None
    };

    let model: GradientBoostedTrees = load_json(&dir.join("model.json"))?;
    model.validate()?;

    let artifacts = ModelArtifacts {
        encoder,
        vectorizer,
        model,
    };

    // the assembler and the model must agree on the column layout
    let width = artifacts.feature_width();
    if width != artifacts.model.num_features() {
        bail!(
            "artifact mismatch: encoder/vectorizer produce {width} columns \
             but the model expects {}",
            artifacts.model.num_features()
        );
    }

    Ok(artifacts)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read artifact {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse artifact {}", path.display()))
}

// SalaryModel is re-exported at the seam callers actually use.
pub use model::SalaryModel;
