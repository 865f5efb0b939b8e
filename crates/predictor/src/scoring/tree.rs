#![forbid(unsafe_code)]

use super::scorer::{Scorer, ScoringError, sigmoid};
use crate::prediction::{Feature, FeatureRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Rows with `value < threshold` go to `left`.
    Split {
        feature: Feature,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A regression tree stored as a flat node list rooted at index 0.
/// Children always sit after their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

/// Gradient-boosted trees with a logistic link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl Tree {
    fn leaf_value(&self, tree: usize, row: &FeatureRow) -> Result<f64, ScoringError> {
        let mut ix = 0;
        loop {
            match self.nodes.get(ix) {
                Some(Node::Leaf { value }) => return Ok(*value),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let next = if row.value(*feature) < *threshold {
                        *left
                    } else {
                        *right
                    };
                    if next <= ix {
                        return Err(ScoringError::MalformedTree { tree, node: next });
                    }
                    ix = next;
                }
                None => return Err(ScoringError::MalformedTree { tree, node: ix }),
            }
        }
    }

    fn check(&self, tree: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(format!("tree {tree} is empty"));
        }
        for (ix, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    if !threshold.is_finite() {
                        return Err(format!("tree {tree} node {ix}: non-finite threshold"));
                    }
                    for child in [*left, *right] {
                        if child <= ix || child >= self.nodes.len() {
                            return Err(format!(
                                "tree {tree} node {ix}: child {child} out of order or range"
                            ));
                        }
                    }
                }
                Node::Leaf { value } if !value.is_finite() => {
                    return Err(format!("tree {tree} node {ix}: non-finite leaf"));
                }
                Node::Leaf { .. } => {}
            }
        }
        Ok(())
    }
}

impl TreeEnsemble {
    /// Sum of leaf values plus the base score.
    pub fn margin(&self, row: &FeatureRow) -> Result<f64, ScoringError> {
        self.trees
            .iter()
            .enumerate()
            .try_fold(self.base_score, |acc, (ix, tree)| {
                Ok(acc + tree.leaf_value(ix, row)?)
            })
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if !self.base_score.is_finite() {
            return Err("non-finite base score".to_owned());
        }
        if self.trees.is_empty() {
            return Err("ensemble has no trees".to_owned());
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(ix, tree)| tree.check(ix))
    }
}

impl Scorer for TreeEnsemble {
    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, ScoringError> {
        Ok(sigmoid(self.margin(row)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompetitorId, VenueId};

    fn row(temperature: f64) -> FeatureRow {
        FeatureRow {
            year: 2024,
            round: 1,
            temperature,
            precipitation: 0.0,
            windspeed: 10.0,
            venue: VenueId(6),
            competitor: CompetitorId(9),
        }
    }

    fn stump(threshold: f64, left: f64, right: f64) -> Tree {
        Tree {
            nodes: vec![
                Node::Split {
                    feature: Feature::Temperature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                Node::Leaf { value: left },
                Node::Leaf { value: right },
            ],
        }
    }

    #[test]
    fn threshold_sends_equal_values_right() {
        let ensemble = TreeEnsemble {
            base_score: 0.0,
            trees: vec![stump(20.0, -1.0, 1.0)],
        };
        assert_eq!(ensemble.margin(&row(19.9)).unwrap(), -1.0);
        assert_eq!(ensemble.margin(&row(20.0)).unwrap(), 1.0);
    }

    #[test]
    fn margins_add_up_across_trees() {
        let ensemble = TreeEnsemble {
            base_score: 0.25,
            trees: vec![stump(20.0, -1.0, 1.0), stump(30.0, 0.5, -0.5)],
        };
        assert_eq!(ensemble.margin(&row(25.0)).unwrap(), 1.75);
        assert_eq!(ensemble.predict_proba(&row(25.0)).unwrap(), sigmoid(1.75));
    }

    #[test]
    fn backward_child_is_rejected() {
        let tree = Tree {
            nodes: vec![
                Node::Split {
                    feature: Feature::Temperature,
                    threshold: 0.0,
                    left: 0,
                    right: 1,
                },
                Node::Leaf { value: 0.0 },
            ],
        };
        assert!(tree.check(0).is_err());
        let ensemble = TreeEnsemble {
            base_score: 0.0,
            trees: vec![tree],
        };
        assert_eq!(
            ensemble.margin(&row(-5.0)),
            Err(ScoringError::MalformedTree { tree: 0, node: 0 })
        );
    }

    #[test]
    fn check_rejects_dangling_and_empty_trees() {
        let mut dangling = stump(1.0, 0.0, 0.0);
        dangling.nodes.pop();
        assert!(dangling.check(0).is_err());
        assert!(Tree { nodes: vec![] }.check(0).is_err());
        assert!(stump(1.0, 0.0, 0.0).check(0).is_ok());
    }
}
