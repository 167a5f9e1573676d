//! One-hot encoder artifact.
//!
//! Deserialized from `encoder.json`: parallel `columns`/`categories` arrays
//! whose order fixes the one-hot layout. Unknown categories encode as an
//! all-zero block for their column (the artifact is built with the "ignore"
//! unknown policy), so requests with unseen values never fail here.

use anyhow::{bail, Result};
use serde::Deserialize;

/// Request fields the encoder may reference. Columns outside this set mean
/// the artifact belongs to a different model generation.
const KNOWN_COLUMNS: &[&str] = &["qualification", "work_type", "job_title", "role"];

#[derive(Debug, Clone, Deserialize)]
pub struct OneHotEncoder {
    columns: Vec<String>,
    categories: Vec<Vec<String>>,
}

impl OneHotEncoder {
    /// Structural checks run once at startup; a failing artifact is fatal.
    pub fn validate(&self) -> Result<()> {
        if self.columns.len() != self.categories.len() {
            bail!(
                "encoder artifact mismatch: {} columns but {} category lists",
                self.columns.len(),
                self.categories.len()
            );
        }
        for column in &self.columns {
            if !KNOWN_COLUMNS.contains(&column.as_str()) {
                bail!("encoder artifact references unknown column '{column}'");
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Total width of the one-hot block.
    pub fn width(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    /// Encodes one row (values parallel to `columns`) into `(index, 1.0)`
    /// pairs within the one-hot block, ascending. Unseen values contribute
    /// nothing.
    pub fn encode(&self, row: &[&str]) -> Vec<(usize, f64)> {
        debug_assert_eq!(row.len(), self.columns.len());
        let mut hot = Vec::with_capacity(self.columns.len());
        let mut offset = 0;
        for (cats, value) in self.categories.iter().zip(row) {
            if let Some(pos) = cats.iter().position(|c| c.as_str() == *value) {
                hot.push((offset + pos, 1.0));
            }
            offset += cats.len();
        }
        hot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encoder() -> OneHotEncoder {
        serde_json::from_value(json!({
            "columns": ["work_type", "role"],
            "categories": [
                ["Contract", "Full-Time", "Intern"],
                ["Backend", "Frontend"]
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_width_sums_all_category_lists() {
        assert_eq!(encoder().width(), 5);
    }

    #[test]
    fn test_encode_sets_one_bit_per_column() {
        let hot = encoder().encode(&["Intern", "Backend"]);
        assert_eq!(hot, vec![(2, 1.0), (3, 1.0)]);
    }

    #[test]
    fn test_unknown_value_contributes_nothing() {
        let hot = encoder().encode(&["Freelance", "Frontend"]);
        assert_eq!(hot, vec![(4, 1.0)]);
        assert!(encoder().encode(&["Freelance", "Fullstack"]).is_empty());
    }

    #[test]
    fn test_validate_rejects_mismatched_arrays() {
        let enc: OneHotEncoder = serde_json::from_value(json!({
            "columns": ["work_type", "role"],
            "categories": [["Full-Time"]]
        }))
        .unwrap();
        assert!(enc.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_column() {
        let enc: OneHotEncoder = serde_json::from_value(json!({
            "columns": ["company_size"],
            "categories": [["small", "large"]]
        }))
        .unwrap();
        assert!(enc.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_artifact() {
        assert!(encoder().validate().is_ok());
    }
}
