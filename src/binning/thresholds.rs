use super::error::BinningError;
use super::metadata::FeatureArity;
use super::split::Threshold;

/// Sorted split thresholds for every feature; empty for categorical
/// features. Built once per training run and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThresholdTable {
    thresholds: Box<[Box<[f64]>]>,
}

impl ThresholdTable {

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn thresholds(&self, feature_index: usize) -> &[f64] {
        &self.thresholds[feature_index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.thresholds.iter().map(|t| &t[..])
    }

    /// Bins a feature maps onto: thresholds + 1 for a continuous feature,
    /// the arity for a categorical one.
    pub fn num_bins(&self, feature_index: usize, arity: &FeatureArity) -> usize {
        if arity.is_categorical(feature_index) {
            arity.arity(feature_index)
        } else {
            self.thresholds[feature_index].len() + 1
        }
    }

    pub fn all_num_bins(&self, arity: &FeatureArity) -> Vec<usize> {
        (0..self.len()).map(|i| self.num_bins(i, arity)).collect()
    }

    pub fn max_num_bins(&self, arity: &FeatureArity) -> usize {
        (0..self.len()).map(|i| self.num_bins(i, arity)).max().unwrap_or(0)
    }
}

/// Projects each continuous feature's splits onto their thresholds.
///
/// Thresholds must arrive finite, ascending and unique; they are checked
/// but never re-sorted or de-duplicated. Categorical features must come
/// with no splits and get an empty entry.
pub fn build_threshold_table<S: Threshold>(arity: &FeatureArity, splits: &[Vec<S>]) -> Result<ThresholdTable, BinningError> {

    if splits.len() != arity.len() {
        return Err(BinningError::LengthMismatch {
            what: "per-feature split list",
            expected: arity.len(),
            got: splits.len(),
        });
    }

    let mut thresholds: Vec<Box<[f64]>> = Vec::with_capacity(splits.len());

    for (feature_index, feature_splits) in splits.iter().enumerate() {

        if arity.is_categorical(feature_index) {
            if !feature_splits.is_empty() {
                return Err(BinningError::CategoricalSplits {
                    feature_index,
                    arity: arity.arity(feature_index),
                    count: feature_splits.len(),
                });
            }
            thresholds.push(Vec::new().into_boxed_slice());
            continue;
        }

        let values: Vec<f64> = feature_splits.iter().map(Threshold::threshold).collect();
        check_thresholds(feature_index, &values)?;
        thresholds.push(values.into_boxed_slice());
    }

    Ok(ThresholdTable { thresholds: thresholds.into_boxed_slice() })
}

fn check_thresholds(feature_index: usize, values: &[f64]) -> Result<(), BinningError> {

    for (position, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(BinningError::NonFiniteThreshold { feature_index, position, value });
        }
        if position > 0 && values[position - 1] >= value {
            return Err(BinningError::UnsortedThresholds {
                feature_index,
                position,
                previous: values[position - 1],
                value,
            });
        }
    }

    Ok(())
}
