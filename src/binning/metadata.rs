use std::collections::HashMap;
use super::error::BinningError;

/// Per-feature arity: 0 marks a continuous feature, k > 0 a categorical
/// feature with categories {0, ..., k-1}.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureArity {
    arity: Vec<usize>,
}

impl FeatureArity {

    pub fn new(arity: Vec<usize>) -> Self {
        FeatureArity { arity }
    }

    /// All features continuous.
    pub fn continuous(num_features: usize) -> Self {
        FeatureArity { arity: vec![0; num_features] }
    }

    /// Builds the table from a sparse map of categorical feature index to
    /// category count; every feature not in the map is continuous.
    pub fn from_categorical_features(num_features: usize, categorical: &HashMap<usize, usize>) -> Result<Self, BinningError> {

        let mut arity = vec![0; num_features];

        for (&feature_index, &count) in categorical.iter() {
            if feature_index >= num_features {
                return Err(BinningError::InvalidArgument(format!(
                    "categorical feature index {} out of range for {} features", feature_index, num_features)));
            }
            if count == 0 {
                return Err(BinningError::InvalidArgument(format!(
                    "categorical feature {} declared with zero categories", feature_index)));
            }
            arity[feature_index] = count;
        }

        Ok(FeatureArity { arity })
    }

    pub fn len(&self) -> usize {
        self.arity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arity.is_empty()
    }

    pub fn arity(&self, feature_index: usize) -> usize {
        self.arity[feature_index]
    }

    pub fn is_continuous(&self, feature_index: usize) -> bool {
        self.arity[feature_index] == 0
    }

    pub fn is_categorical(&self, feature_index: usize) -> bool {
        self.arity[feature_index] > 0
    }

    pub fn num_categorical(&self) -> usize {
        self.arity.iter().filter(|&&a| a > 0).count()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.arity
    }
}

impl From<Vec<usize>> for FeatureArity {
    fn from(arity: Vec<usize>) -> Self {
        FeatureArity::new(arity)
    }
}
