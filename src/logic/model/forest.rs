//! Tree Ensemble Classifier
//!
//! Random forest exported as JSON in the flattened node-array layout:
//! per tree, parallel arrays `children_left`, `children_right`, `feature`,
//! `threshold` and `value` (class counts per node). A leaf has
//! `children_left == -1`. Samples go left when `x[feature] <= threshold`.
//!
//! Each leaf's counts are normalised into a distribution and the per-tree
//! distributions are averaged.

use serde::Deserialize;

use super::inference::{InferenceError, ProbabilisticClassifier};
use crate::logic::features::FEATURE_COUNT;

const LEAF: i64 = -1;

/// On-disk form of one tree
#[derive(Debug, Clone, Deserialize)]
pub struct TreeArrays {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

/// On-disk form of `forest.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ForestFile {
    pub n_classes: usize,
    pub trees: Vec<TreeArrays>,
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(Vec<f64>),
}

#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Checked conversion; children must point forward so traversal always ends
    fn from_arrays(arrays: &TreeArrays, n_classes: usize) -> Result<Self, String> {
        let len = arrays.children_left.len();
        if len == 0 {
            return Err("tree has no nodes".to_string());
        }
        if arrays.children_right.len() != len
            || arrays.feature.len() != len
            || arrays.threshold.len() != len
            || arrays.value.len() != len
        {
            return Err("node arrays differ in length".to_string());
        }

        let mut nodes = Vec::with_capacity(len);
        for i in 0..len {
            let (left, right) = (arrays.children_left[i], arrays.children_right[i]);

            if left == LEAF {
                let counts = &arrays.value[i];
                if counts.len() != n_classes {
                    return Err(format!("node {i}: {} class counts, expected {n_classes}", counts.len()));
                }
                let total: f64 = counts.iter().sum();
                if !total.is_finite() || total <= 0.0 || counts.iter().any(|c| *c < 0.0) {
                    return Err(format!("node {i}: leaf counts do not form a distribution"));
                }
                nodes.push(Node::Leaf(counts.iter().map(|c| c / total).collect()));
                continue;
            }

            let forward = |child: i64| child > i as i64 && (child as usize) < len;
            if !forward(left) || !forward(right) {
                return Err(format!("node {i}: child index out of range"));
            }
            let feature = usize::try_from(arrays.feature[i])
                .ok()
                .filter(|f| *f < FEATURE_COUNT)
                .ok_or_else(|| format!("node {i}: feature index {} out of range", arrays.feature[i]))?;

            nodes.push(Node::Split {
                feature,
                threshold: arrays.threshold[i],
                left: left as usize,
                right: right as usize,
            });
        }

        Ok(Self { nodes })
    }

    fn leaf_for(&self, x: &[f64; FEATURE_COUNT]) -> &[f64] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf(distribution) => return distribution,
                Node::Split { feature, threshold, left, right } => {
                    index = if x[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Random forest backend
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    n_classes: usize,
    trees: Vec<Tree>,
}

impl ForestClassifier {
    pub fn from_file(file: &ForestFile) -> Result<Self, String> {
        if file.n_classes == 0 {
            return Err("n_classes must be positive".to_string());
        }
        if file.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }

        let trees = file
            .trees
            .iter()
            .enumerate()
            .map(|(t, arrays)| Tree::from_arrays(arrays, file.n_classes).map_err(|e| format!("tree {t}: {e}")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            n_classes: file.n_classes,
            trees,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl ProbabilisticClassifier for ForestClassifier {
    fn predict_proba(&self, scaled: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, InferenceError> {
        let mut sum = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (acc, p) in sum.iter_mut().zip(tree.leaf_for(scaled)) {
                *acc += p;
            }
        }

        let n = self.trees.len() as f64;
        Ok(sum.into_iter().map(|s| s / n).collect())
    }

    fn n_classes(&self) -> Option<usize> {
        Some(self.n_classes)
    }

    fn method(&self) -> &'static str {
        "random_forest"
    }
}
