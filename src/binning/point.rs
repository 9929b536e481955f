use serde::{Deserialize, Serialize};
use super::bin::find_bin;
use super::error::BinningError;
use super::metadata::FeatureArity;
use super::thresholds::ThresholdTable;

/// A labeled raw feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub label: f64,
    pub features: Vec<f64>,
}

/// A labeled vector of bin indices, aligned with the raw point it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnedPoint {
    label: f64,
    bins: Vec<usize>,
}

impl RawPoint {

    pub fn new(label: f64, features: Vec<f64>) -> Self {
        RawPoint { label, features }
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }
}

impl BinnedPoint {

    pub fn new(label: f64, bins: Vec<usize>) -> Self {
        BinnedPoint { label, bins }
    }

    pub fn label(&self) -> f64 {
        self.label
    }

    pub fn bins(&self) -> &[usize] {
        &self.bins
    }

    pub fn bin(&self, feature_index: usize) -> usize {
        self.bins[feature_index]
    }

    pub fn num_features(&self) -> usize {
        self.bins.len()
    }

    pub fn into_bins(self) -> Vec<usize> {
        self.bins
    }
}

/// Checks that the threshold table and arity describe the same features.
pub(crate) fn check_tables(thresholds: &ThresholdTable, arity: &FeatureArity) -> Result<(), BinningError> {

    if thresholds.len() != arity.len() {
        return Err(BinningError::LengthMismatch {
            what: "threshold table",
            expected: arity.len(),
            got: thresholds.len(),
        });
    }
    Ok(())
}

/*
    Input..........: one raw point, the shared threshold table and arity
    Output.........: binned point with the same label and one bin per feature
    Errors.........: LengthMismatch when the point or table disagree with the
                     arity; the first failing feature's error wrapped in
                     InvalidPoint with the point's label and raw values
*/
pub fn convert_point(point: &RawPoint, thresholds: &ThresholdTable, arity: &FeatureArity) -> Result<BinnedPoint, BinningError> {

    check_tables(thresholds, arity)?;
    bin_point(point, thresholds, arity)
}

/// `convert_point` without the table check, for callers that did it once.
pub(crate) fn bin_point(point: &RawPoint, thresholds: &ThresholdTable, arity: &FeatureArity) -> Result<BinnedPoint, BinningError> {

    if point.features.len() != arity.len() {
        return Err(BinningError::LengthMismatch {
            what: "point features",
            expected: arity.len(),
            got: point.features.len(),
        });
    }

    let bins = point.features.iter()
        .enumerate()
        .map(|(i, &value)| find_bin(i, value, arity.arity(i), thresholds.thresholds(i)))
        .collect::<Result<Vec<usize>, BinningError>>()
        .map_err(|e| BinningError::InvalidPoint {
            label: point.label,
            features: point.features.clone(),
            source: Box::new(e),
        })?;

    Ok(BinnedPoint::new(point.label, bins))
}
