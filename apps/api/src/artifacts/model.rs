//! Boosted-tree regressor artifact and the `SalaryModel` seam.
//!
//! `AppState` carries an `Arc<dyn SalaryModel>` so handler tests can swap in
//! a stub with a fixed output instead of loading a real tree ensemble.
//!
//! The artifact (`model.json`) is a flat dump of the trained ensemble: each
//! tree is a node array where internal nodes route `x < threshold` to `left`
//! and everything else to `right`, and leaves carry the additive value. The
//! prediction is `base_score + Σ leaf values`, in log1p-transformed salary
//! units — callers apply `exp_m1` to recover the original scale.

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::prediction::features::FeatureVector;

/// A pretrained salary regressor. Returns the log1p-transformed salary.
pub trait SalaryModel: Send + Sync {
    fn predict_log_salary(&self, features: &FeatureVector) -> Result<f64>;

    /// Feature-vector width the model was trained against.
    fn num_features(&self) -> usize;
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeNode {
    /// Split feature index; -1 marks a leaf.
    pub feature: i64,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub left: usize,
    #[serde(default)]
    pub right: usize,
    /// Leaf value; ignored on internal nodes.
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walks from the root to a leaf. Load-time validation guarantees child
    /// indices point strictly forward, so the walk terminates.
    fn score(&self, features: &FeatureVector) -> f64 {
        let mut node = &self.nodes[0];
        while node.feature >= 0 {
            let x = features.get(node.feature as usize);
            let next = if x < node.threshold {
                node.left
            } else {
                node.right
            };
            node = &self.nodes[next];
        }
        node.value
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GradientBoostedTrees {
    num_features: usize,
    base_score: f64,
    trees: Vec<Tree>,
}

impl GradientBoostedTrees {
    /// Structural checks run once at startup; a failing artifact is fatal.
    pub fn validate(&self) -> Result<()> {
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                bail!("model artifact: tree {t} has no nodes");
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                if node.feature < 0 {
                    continue;
                }
                if node.feature as usize >= self.num_features {
                    bail!(
                        "model artifact: tree {t} node {n} splits on feature {} \
                         but the model is {}-wide",
                        node.feature,
                        self.num_features
                    );
                }
                // forward-pointing children guarantee the tree walk terminates
                if node.left <= n || node.right <= n {
                    bail!("model artifact: tree {t} node {n} has a backward child link");
                }
                if node.left >= tree.nodes.len() || node.right >= tree.nodes.len() {
                    bail!("model artifact: tree {t} node {n} has an out-of-range child");
                }
            }
        }
        Ok(())
    }
}

impl SalaryModel for GradientBoostedTrees {
    fn predict_log_salary(&self, features: &FeatureVector) -> Result<f64> {
        if features.width() != self.num_features {
            bail!(
                "feature vector is {}-wide but the model expects {} columns",
                features.width(),
                self.num_features
            );
        }
        let total: f64 = self.trees.iter().map(|t| t.score(features)).sum();
        Ok(self.base_score + total)
    }

    fn num_features(&self) -> usize {
        self.num_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// One tree: feature 0 < 5.0 → leaf 1.0, else leaf 2.0. Base score 0.5.
    fn model() -> GradientBoostedTrees {
        serde_json::from_value(json!({
            "num_features": 3,
            "base_score": 0.5,
            "trees": [{
                "nodes": [
                    {"feature": 0, "threshold": 5.0, "left": 1, "right": 2},
                    {"feature": -1, "value": 1.0},
                    {"feature": -1, "value": 2.0}
                ]
            }]
        }))
        .unwrap()
    }

    fn features(experience: f64) -> FeatureVector {
        let mut f = FeatureVector::with_width(3);
        f.push(0, experience);
        f
    }

    #[test]
    fn test_prediction_sums_base_score_and_leaves() {
        let m = model();
        assert_eq!(m.predict_log_salary(&features(2.0)).unwrap(), 1.5);
        assert_eq!(m.predict_log_salary(&features(7.0)).unwrap(), 2.5);
    }

    #[test]
    fn test_split_boundary_routes_right() {
        // x < threshold goes left, so exactly 5.0 takes the right branch
        assert_eq!(model().predict_log_salary(&features(5.0)).unwrap(), 2.5);
    }

    #[test]
    fn test_absent_feature_reads_as_zero() {
        let f = FeatureVector::with_width(3);
        assert_eq!(model().predict_log_salary(&f).unwrap(), 1.5);
    }

    #[test]
    fn test_wrong_width_vector_is_an_error() {
        let f = FeatureVector::with_width(7);
        assert!(model().predict_log_salary(&f).is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_model() {
        assert!(model().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_backward_child_link() {
        let m: GradientBoostedTrees = serde_json::from_value(json!({
            "num_features": 1,
            "base_score": 0.0,
            "trees": [{
                "nodes": [
                    {"feature": 0, "threshold": 1.0, "left": 0, "right": 1},
                    {"feature": -1, "value": 1.0}
                ]
            }]
        }))
        .unwrap();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_split_beyond_model_width() {
        let m: GradientBoostedTrees = serde_json::from_value(json!({
            "num_features": 1,
            "base_score": 0.0,
            "trees": [{
                "nodes": [
                    {"feature": 4, "threshold": 1.0, "left": 1, "right": 2},
                    {"feature": -1, "value": 1.0},
                    {"feature": -1, "value": 2.0}
                ]
            }]
        }))
        .unwrap();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_multiple_trees_accumulate() {
        let m: GradientBoostedTrees = serde_json::from_value(json!({
            "num_features": 1,
            "base_score": 1.0,
            "trees": [
                {"nodes": [{"feature": -1, "value": 2.0}]},
                {"nodes": [{"feature": -1, "value": 3.0}]}
            ]
        }))
        .unwrap();
        let f = FeatureVector::with_width(1);
        assert_eq!(m.predict_log_salary(&f).unwrap(), 6.0);
    }
}
