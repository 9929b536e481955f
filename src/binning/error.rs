/// Errors raised while building the threshold table or binning points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BinningError {
    /// A categorical value lies outside `[0, arity)`.
    #[error("feature {feature_index}: categorical value {value} is outside the valid range [0, {arity})")]
    InvalidCategoricalValue {
        feature_index: usize,
        value: f64,
        arity: usize,
    },

    /// A categorical value lies in range but is not a whole number.
    #[error("feature {feature_index}: categorical value {value} is not an integer category in [0, {arity})")]
    NonIntegralCategoricalValue {
        feature_index: usize,
        value: f64,
        arity: usize,
    },

    /// A point failed to bin; carries the full raw point for reproduction.
    #[error("failed to bin point (label={label}, features={features:?})")]
    InvalidPoint {
        label: f64,
        features: Vec<f64>,
        #[source]
        source: Box<BinningError>,
    },

    /// A point of a dataset failed to bin.
    #[error("failed to bin row {row}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<BinningError>,
    },

    /// Two inputs that must describe the same features disagree in length.
    #[error("{what}: expected length {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A categorical feature was handed continuous splits.
    #[error("feature {feature_index} is categorical (arity {arity}) but has {count} continuous splits")]
    CategoricalSplits {
        feature_index: usize,
        arity: usize,
        count: usize,
    },

    #[error("feature {feature_index}: threshold {value} at position {position} is not finite")]
    NonFiniteThreshold {
        feature_index: usize,
        position: usize,
        value: f64,
    },

    #[error("feature {feature_index}: thresholds are not strictly ascending at position {position} ({previous} then {value})")]
    UnsortedThresholds {
        feature_index: usize,
        position: usize,
        previous: f64,
        value: f64,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl BinningError {
    /// Dataset row that failed, if the error was raised by a dataset conversion.
    pub fn row(&self) -> Option<usize> {
        match self {
            BinningError::InvalidRow { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// Feature that triggered the failure, looking through point/row context.
    pub fn feature_index(&self) -> Option<usize> {
        match self.root() {
            BinningError::InvalidCategoricalValue { feature_index, .. }
            | BinningError::NonIntegralCategoricalValue { feature_index, .. }
            | BinningError::CategoricalSplits { feature_index, .. }
            | BinningError::NonFiniteThreshold { feature_index, .. }
            | BinningError::UnsortedThresholds { feature_index, .. } => Some(*feature_index),
            _ => None,
        }
    }

    /// Raw point attached by `convert_point`, as `(label, features)`.
    pub fn point(&self) -> Option<(f64, &[f64])> {
        match self {
            BinningError::InvalidPoint { label, features, .. } => Some((*label, features.as_slice())),
            BinningError::InvalidRow { source, .. } => source.point(),
            _ => None,
        }
    }

    /// Innermost error, with row and point context stripped.
    pub fn root(&self) -> &BinningError {
        match self {
            BinningError::InvalidPoint { source, .. } | BinningError::InvalidRow { source, .. } => {
                source.root()
            }
            other => other,
        }
    }
}
