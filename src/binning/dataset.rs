use std::str::FromStr;
use rayon::prelude::*;
use super::error::BinningError;
use super::metadata::FeatureArity;
use super::point::{bin_point, check_tables, BinnedPoint, RawPoint};
use super::thresholds::ThresholdTable;

/// What a dataset conversion does when a point fails to bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop and report the lowest-index failing point.
    Abort,
    /// Convert every point and report every failure.
    Collect,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        ErrorPolicy::Abort
    }
}

impl FromStr for ErrorPolicy {
    type Err = BinningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(ErrorPolicy::Abort),
            "collect" => Ok(ErrorPolicy::Collect),
            other => Err(BinningError::InvalidArgument(format!(
                "unknown error policy '{}' (expected abort or collect)", other))),
        }
    }
}

fn bin_row(row: usize, point: &RawPoint, thresholds: &ThresholdTable, arity: &FeatureArity) -> Result<BinnedPoint, BinningError> {
    bin_point(point, thresholds, arity)
        .map_err(|e| BinningError::InvalidRow { row, source: Box::new(e) })
}

/*
    Input..........: raw points, the shared threshold table and arity
    Output.........: one binned point per raw point, in input order
    Errors.........: the lowest-index failing point, wrapped in InvalidRow
    Threads........: current rayon pool
*/
pub fn convert_dataset(points: &[RawPoint], thresholds: &ThresholdTable, arity: &FeatureArity) -> Result<Vec<BinnedPoint>, BinningError> {

    check_tables(thresholds, arity)?;

    let converted = points.par_iter()
        .map(|point| bin_point(point, thresholds, arity))
        .collect::<Result<Vec<BinnedPoint>, BinningError>>();

    match converted {
        Ok(binned) => Ok(binned),
        // rayon reports whichever failure it met first; pin it to the lowest row
        Err(_) => {
            let first = points.par_iter()
                .enumerate()
                .find_map_first(|(row, point)| bin_row(row, point, thresholds, arity).err());
            match first {
                Some(err) => Err(err),
                None => Err(BinningError::InvalidArgument(
                    "dataset conversion failed but no failing row was found".into())),
            }
        }
    }
}

/*
    Input..........: raw points, the shared threshold table and arity
    Output.........: one binned point per raw point, in input order, or every
                     failing point as InvalidRow in row order
    Threads........: current rayon pool
*/
pub fn convert_dataset_collect_errors(points: &[RawPoint], thresholds: &ThresholdTable, arity: &FeatureArity) -> Result<Vec<BinnedPoint>, Vec<BinningError>> {

    check_tables(thresholds, arity).map_err(|e| vec![e])?;

    let results: Vec<Result<BinnedPoint, BinningError>> = points.par_iter()
        .enumerate()
        .map(|(row, point)| bin_row(row, point, thresholds, arity))
        .collect();

    let mut binned = Vec::with_capacity(results.len());
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(point) => binned.push(point),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() { Ok(binned) } else { Err(errors) }
}

/// Converts under the given policy; the abort policy yields a single error.
pub fn convert_dataset_with_policy(points: &[RawPoint], thresholds: &ThresholdTable, arity: &FeatureArity, policy: ErrorPolicy) -> Result<Vec<BinnedPoint>, Vec<BinningError>> {

    match policy {
        ErrorPolicy::Abort => convert_dataset(points, thresholds, arity).map_err(|e| vec![e]),
        ErrorPolicy::Collect => convert_dataset_collect_errors(points, thresholds, arity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::thresholds::build_threshold_table;

    fn tables() -> (ThresholdTable, FeatureArity) {
        let arity = FeatureArity::new(vec![0, 3]);
        let table = build_threshold_table(&arity, &[vec![1.0, 3.0, 5.0], vec![]]).unwrap();
        (table, arity)
    }

    fn points() -> Vec<RawPoint> {
        vec![
            RawPoint::new(0.0, vec![0.5, 0.0]),
            RawPoint::new(1.0, vec![2.0, 3.0]),
            RawPoint::new(0.0, vec![6.0, 2.0]),
        ]
    }

    #[test]
    fn output_order_matches_input_order() {
        let (table, arity) = tables();
        let points: Vec<RawPoint> = (0..1000)
            .map(|i| RawPoint::new(i as f64, vec![(i % 7) as f64, (i % 3) as f64]))
            .collect();

        let binned = convert_dataset(&points, &table, &arity).unwrap();
        assert_eq!(binned.len(), points.len());
        for (raw, bin) in points.iter().zip(binned.iter()) {
            assert_eq!(raw.label, bin.label());
            assert_eq!(bin.bin(1), raw.features[1] as usize);
        }
        assert_eq!(binned[2].bins(), &[1, 2]);
        assert_eq!(binned[6].bins(), &[3, 0]);
    }

    #[test]
    fn bad_row_is_reported_with_index_and_values() {
        let (table, arity) = tables();
        let err = convert_dataset(&points(), &table, &arity).unwrap_err();

        assert_eq!(err.row(), Some(1));
        assert_eq!(err.point(), Some((1.0, &[2.0, 3.0][..])));
        assert_eq!(
            *err.root(),
            BinningError::InvalidCategoricalValue { feature_index: 1, value: 3.0, arity: 3 }
        );
    }

    #[test]
    fn abort_reports_lowest_failing_row_every_time() {
        let (table, arity) = tables();
        let mut points: Vec<RawPoint> = (0..5000).map(|i| RawPoint::new(0.0, vec![i as f64, 1.0])).collect();
        for &row in [4321, 17, 2500, 999].iter() {
            points[row].features[1] = 9.0;
        }

        for _ in 0..10 {
            assert_eq!(convert_dataset(&points, &table, &arity).unwrap_err().row(), Some(17));
        }
    }

    #[test]
    fn collect_reports_every_failure_in_row_order() {
        let (table, arity) = tables();
        let mut points = points();
        points.push(RawPoint::new(1.0, vec![0.0, 1.5]));

        let errors = convert_dataset_collect_errors(&points, &table, &arity).unwrap_err();
        let rows: Vec<Option<usize>> = errors.iter().map(BinningError::row).collect();
        assert_eq!(rows, vec![Some(1), Some(3)]);
        assert!(matches!(errors[1].root(), BinningError::NonIntegralCategoricalValue { .. }));
    }

    #[test]
    fn clean_dataset_converts_under_both_policies() {
        let (table, arity) = tables();
        let points = vec![RawPoint::new(0.0, vec![0.5, 0.0]), RawPoint::new(1.0, vec![6.0, 2.0])];

        let abort = convert_dataset_with_policy(&points, &table, &arity, ErrorPolicy::Abort).unwrap();
        let collect = convert_dataset_with_policy(&points, &table, &arity, ErrorPolicy::Collect).unwrap();
        assert_eq!(abort, collect);
        assert_eq!(abort, vec![BinnedPoint::new(0.0, vec![0, 0]), BinnedPoint::new(1.0, vec![3, 2])]);
    }

    #[test]
    fn empty_dataset_converts_to_empty() {
        let (table, arity) = tables();
        assert!(convert_dataset(&[], &table, &arity).unwrap().is_empty());
        assert!(convert_dataset_collect_errors(&[], &table, &arity).unwrap().is_empty());
    }

    #[test]
    fn mismatched_tables_fail_before_any_point() {
        let (table, _) = tables();
        let err = convert_dataset(&points(), &table, &FeatureArity::continuous(3)).unwrap_err();
        assert!(matches!(err, BinningError::LengthMismatch { .. }));
        assert_eq!(err.row(), None);
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("abort".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Abort);
        assert_eq!("collect".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Collect);
        assert!("retry".parse::<ErrorPolicy>().is_err());
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Abort);
    }
}
