use serde::{Deserialize, Serialize};
use super::error::BinningError;

/// Anything that carries a continuous split threshold.
pub trait Threshold {
    fn threshold(&self) -> f64;
}

impl Threshold for f64 {
    fn threshold(&self) -> f64 {
        *self
    }
}

/// A candidate split on a continuous feature, as produced by the
/// split-generation step: points with `value <= threshold` go left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousSplit {
    pub feature_index: usize,
    pub threshold: f64,
}

impl ContinuousSplit {
    pub fn new(feature_index: usize, threshold: f64) -> Self {
        ContinuousSplit { feature_index, threshold }
    }
}

impl Threshold for ContinuousSplit {
    fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Groups a flat split list into one list per feature, keeping the order
/// in which each feature's splits were given.
pub fn group_by_feature(num_features: usize, splits: Vec<ContinuousSplit>) -> Result<Vec<Vec<ContinuousSplit>>, BinningError> {

    let mut grouped: Vec<Vec<ContinuousSplit>> = vec![Vec::new(); num_features];

    for split in splits {
        if split.feature_index >= num_features {
            return Err(BinningError::InvalidArgument(format!(
                "split on feature {} but only {} features are declared", split.feature_index, num_features)));
        }
        grouped[split.feature_index].push(split);
    }

    Ok(grouped)
}
