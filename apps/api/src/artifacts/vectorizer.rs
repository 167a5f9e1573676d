//! TF-IDF vectorizer artifact.
//!
//! Deserialized from `tfidf.json`: a term → column map plus per-column idf
//! weights. Tokenization mirrors the training pipeline: lower-cased
//! alphanumeric runs of at least two characters. Output is tf × idf with L2
//! normalization, matching what the model saw at training time.

use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn validate(&self) -> Result<()> {
        for (term, &index) in &self.vocabulary {
            if index >= self.idf.len() {
                bail!(
                    "tfidf artifact mismatch: term '{term}' maps to column {index} \
                     but only {} idf weights are present",
                    self.idf.len()
                );
            }
        }
        Ok(())
    }

    /// Width of the TF-IDF block.
    pub fn width(&self) -> usize {
        self.idf.len()
    }

    /// Vectorizes free text into `(index, weight)` pairs, ascending by index.
    /// Out-of-vocabulary tokens are dropped; empty or fully unseen text
    /// yields an empty (all-zero) block.
    pub fn vectorize(&self, text: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        weighted.sort_unstable_by_key(|&(index, _)| index);

        let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weighted {
                *w /= norm;
            }
        }
        weighted
    }
}

/// Lower-cased alphanumeric tokens of length ≥ 2.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_lowercase())
}
