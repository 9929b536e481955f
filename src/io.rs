extern crate csv;

use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::iter;
use serde::Serialize;
use crate::binning::{BinnedPoint, BinningError, ContinuousSplit, RawPoint};

pub fn single_col_csv_to_usize_vec(filename: &str) -> Result<Vec<usize>, Box<dyn Error>> {

    let file = File::open(filename)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);

    let mut vec: Vec<usize> = Vec::new();

    for (record_no, entry) in rdr.records().enumerate() {
        let entry = entry?;
        let val = match entry[0].trim().parse::<usize>() {
            Ok(val) => val,
            Err(_) => return Err( format!("{}: record {}: cannot parse '{}' as an arity", filename, record_no + 1, &entry[0]).into() ),
        };
        vec.push(val);
    }
    Ok(vec)
}

/* one point per record: label first, then the feature values */
pub fn labeled_csv_to_points(filename: &str, has_headers: bool) -> Result<Vec<RawPoint>, Box<dyn Error>> {

    let file = File::open(filename)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .from_reader(file);

    let mut vec: Vec<RawPoint> = Vec::new();

    for (record_no, entry) in rdr.records().enumerate() {

        let entry = entry?;
        let mut row: Vec<f64> = Vec::with_capacity(entry.len());

        for field in entry.iter() {
            match field.trim().parse::<f64>() {
                Ok(val) => row.push(val),
                Err(_) => return Err( format!("{}: record {}: cannot parse '{}' as a number", filename, record_no + 1, field).into() ),
            }
        }

        if row.is_empty() {
            return Err( format!("{}: record {} has no label", filename, record_no + 1).into() );
        }

        let label = row.remove(0);
        vec.push(RawPoint::new(label, row));
    }
    Ok(vec)
}

pub fn json_to_splits(filename: &str) -> Result<Vec<ContinuousSplit>, Box<dyn Error>> {

    let file = File::open(filename)?;
    let splits: Vec<ContinuousSplit> = serde_json::from_reader(BufReader::new(file))?;
    Ok(splits)
}

/* label first, then one bin index per feature */
pub fn binned_points_to_csv(filename: &str, points: &[BinnedPoint]) -> Result<(), Box<dyn Error>> {

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(filename)?;

    for point in points {
        let record = iter::once(point.label().to_string())
            .chain(point.bins().iter().map(|b| b.to_string()));
        wtr.write_record(record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct ErrorRecord {
    row: Option<usize>,
    feature_index: Option<usize>,
    label: Option<f64>,
    features: Option<Vec<f64>>,
    message: String,
}

impl ErrorRecord {
    fn from_error(err: &BinningError) -> Self {
        let point = err.point();
        ErrorRecord {
            row: err.row(),
            feature_index: err.feature_index(),
            label: point.map(|(label, _)| label),
            features: point.map(|(_, features)| features.to_vec()),
            message: err.root().to_string(),
        }
    }
}

pub fn errors_to_json(filename: &str, errors: &[BinningError]) -> Result<(), Box<dyn Error>> {

    let records: Vec<ErrorRecord> = errors.iter().map(ErrorRecord::from_error).collect();

    let mut writer = BufWriter::new(File::create(filename)?);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("treepoint_io_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn points_are_read_label_first() {
        let path = scratch("points.csv");
        fs::write(&path, "1.0,1.5,1\n0,-2.25, 0\n").unwrap();

        let points = labeled_csv_to_points(path.to_str().unwrap(), false).unwrap();
        assert_eq!(points, vec![
            RawPoint::new(1.0, vec![1.5, 1.0]),
            RawPoint::new(0.0, vec![-2.25, 0.0]),
        ]);
    }

    #[test]
    fn header_row_is_skipped_when_asked() {
        let path = scratch("points_header.csv");
        fs::write(&path, "label,x0\n3,4\n").unwrap();

        let points = labeled_csv_to_points(path.to_str().unwrap(), true).unwrap();
        assert_eq!(points, vec![RawPoint::new(3.0, vec![4.0])]);
        assert!(labeled_csv_to_points(path.to_str().unwrap(), false).is_err());
    }

    #[test]
    fn ragged_or_garbled_points_fail() {
        let ragged = scratch("ragged.csv");
        fs::write(&ragged, "1,2,3\n1,2\n").unwrap();
        assert!(labeled_csv_to_points(ragged.to_str().unwrap(), false).is_err());

        let garbled = scratch("garbled.csv");
        fs::write(&garbled, "1,two\n").unwrap();
        let err = labeled_csv_to_points(garbled.to_str().unwrap(), false).unwrap_err();
        assert!(err.to_string().contains("record 1: cannot parse 'two'"));
    }

    #[test]
    fn arity_column_is_read() {
        let path = scratch("arity.csv");
        fs::write(&path, "0\n3\n0\n").unwrap();
        assert_eq!(single_col_csv_to_usize_vec(path.to_str().unwrap()).unwrap(), vec![0, 3, 0]);

        fs::write(&path, "0\n-1\n").unwrap();
        let err = single_col_csv_to_usize_vec(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("record 2: cannot parse '-1'"));
    }

    #[test]
    fn splits_are_read_from_json() {
        let path = scratch("splits.json");
        fs::write(&path, r#"[{"feature_index": 0, "threshold": 2.0}, {"feature_index": 2, "threshold": -1.5}]"#).unwrap();

        let splits = json_to_splits(path.to_str().unwrap()).unwrap();
        assert_eq!(splits, vec![ContinuousSplit::new(0, 2.0), ContinuousSplit::new(2, -1.5)]);
    }

    #[test]
    fn binned_points_are_written_label_first() {
        let path = scratch("binned.csv");
        binned_points_to_csv(path.to_str().unwrap(), &[
            BinnedPoint::new(1.0, vec![0, 1]),
            BinnedPoint::new(0.5, vec![3, 0]),
        ]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1,0,1\n0.5,3,0\n");
    }

    #[test]
    fn error_report_names_row_feature_and_point() {
        let path = scratch("errors.json");
        let err = BinningError::InvalidRow {
            row: 1,
            source: Box::new(BinningError::InvalidPoint {
                label: 1.0,
                features: vec![2.0, 3.0],
                source: Box::new(BinningError::InvalidCategoricalValue { feature_index: 1, value: 3.0, arity: 3 }),
            }),
        };
        errors_to_json(path.to_str().unwrap(), &[err]).unwrap();

        let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report[0]["row"], 1);
        assert_eq!(report[0]["feature_index"], 1);
        assert_eq!(report[0]["label"], 1.0);
        assert_eq!(report[0]["features"], serde_json::json!([2.0, 3.0]));
        assert!(report[0]["message"].as_str().unwrap().contains("[0, 3)"));
    }
}
