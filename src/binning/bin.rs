use super::error::BinningError;

/*
    Input..........: one feature value, its arity and (arity == 0) its
                     ascending, unique thresholds
    Output.........: bin index of the value
                     continuous:  |{ t in thresholds : t < value }|, in [0, |thresholds|]
                     categorical: the value itself, in [0, arity)
    Errors.........: InvalidCategoricalValue when a categorical value is
                     outside [0, arity); NaN counts as out of range and
                     gets this variant too. NonIntegralCategoricalValue
                     when it is in range but fractional
*/
pub fn find_bin(feature_index: usize, value: f64, arity: usize, thresholds: &[f64]) -> Result<usize, BinningError> {

    if arity == 0 {
        Ok(count_below(thresholds, value))
    } else {
        category_bin(feature_index, value, arity)
    }
}

/// Number of thresholds strictly less than `value`, i.e. the lower bound
/// insertion point. An exact match lands in the bin to its left, so bin i
/// holds thresholds[i-1] < v <= thresholds[i]. NaN compares false against
/// every threshold and lands in bin 0.
fn count_below(thresholds: &[f64], value: f64) -> usize {

    let mut lb = 0;
    let mut ub = thresholds.len();

    while lb < ub {
        let mid = lb + (ub - lb) / 2;
        if thresholds[mid] < value {
            lb = mid + 1;
        } else {
            ub = mid;
        }
    }

    lb
}

fn category_bin(feature_index: usize, value: f64, arity: usize) -> Result<usize, BinningError> {

    // written so NaN fails the range check and reports InvalidCategoricalValue
    if !(value >= 0.0 && value < arity as f64) {
        return Err(BinningError::InvalidCategoricalValue { feature_index, value, arity });
    }

    if value.fract() != 0.0 {
        return Err(BinningError::NonIntegralCategoricalValue { feature_index, value, arity });
    }

    Ok(value as usize)
}
