//! Loader for the UCI Iris data file (`iris.data`).
//!
//! Format: UTF-8, comma separated, no header, one flower per line:
//! `sepal_length,sepal_width,petal_length,petal_width,class`
//! where `class` is `Iris-setosa`, `Iris-versicolor` or `Iris-virginica`
//! (the `Iris-` prefix is optional). Blank lines are skipped.

use std::path::Path;

use tracing::debug;

use crate::data::record::Record;
use crate::error::DataError;

/// Number of measurements per flower.
pub const N_FEATURES: usize = 4;

/// Species names in label order.
pub const CLASS_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

pub const N_CLASSES: usize = CLASS_NAMES.len();

/// The 150-flower UCI Iris data set, 50 per species, built into the binary.
pub const IRIS_DATA: &str = include_str!("../../data/iris.data");

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads and parses an Iris file.
pub fn load_iris<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, DataError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let records = parse_iris(&text)?;
    debug!(
        "loaded {} records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Parses the built-in copy of the data set, [`IRIS_DATA`].
pub fn embedded_iris() -> Result<Vec<Record>, DataError> {
    let records = parse_iris(IRIS_DATA)?;
    debug!("loaded {} built-in records", records.len());
    Ok(records)
}

/// Parses Iris text into records with one-hot labels over [`CLASS_NAMES`].
pub fn parse_iris(text: &str) -> Result<Vec<Record>, DataError> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() != N_FEATURES + 1 {
            return Err(DataError::Parse {
                line: idx + 1,
                message: format!("expected {} columns, got {}", N_FEATURES + 1, cells.len()),
            });
        }

        let features = parse_floats(&cells[..N_FEATURES], idx + 1)?;
        let class = class_index(cells[N_FEATURES]).ok_or_else(|| DataError::Parse {
            line: idx + 1,
            message: format!("unknown class '{}'", cells[N_FEATURES]),
        })?;

        records.push(Record::with_class(features, class, N_CLASSES));
    }

    if records.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(records)
}

/// Maps a species name to its label index.
pub fn class_index(name: &str) -> Option<usize> {
    let name = name.strip_prefix("Iris-").unwrap_or(name);
    CLASS_NAMES.iter().position(|&c| c.eq_ignore_ascii_case(name))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn parse_floats(cells: &[&str], line: usize) -> Result<Vec<f64>, DataError> {
    cells
        .iter()
        .map(|c| {
            c.parse::<f64>().map_err(|_| DataError::Parse {
                line,
                message: format!("'{}' is not a valid number", c),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "5.1,3.5,1.4,0.2,Iris-setosa\n\
                          7.0,3.2,4.7,1.4,Iris-versicolor\n\
                          \n\
                          6.3,3.3,6.0,2.5,Iris-virginica\n";

    #[test]
    fn parses_sample() {
        let records = parse_iris(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].features, vec![5.1, 3.5, 1.4, 0.2]);
        assert_eq!(records[0].label, vec![1.0, 0.0, 0.0]);
        assert_eq!(records[1].class(), 1);
        assert_eq!(records[2].class(), 2);
    }

    #[test]
    fn class_names_with_or_without_prefix() {
        assert_eq!(class_index("Iris-setosa"), Some(0));
        assert_eq!(class_index("virginica"), Some(2));
        assert_eq!(class_index("Iris-rosea"), None);
    }

    #[test]
    fn reports_bad_lines() {
        let err = parse_iris("5.1,3.5,1.4,Iris-setosa\n").unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 1, .. }));

        let err = parse_iris("5.1,3.5,1.4,0.2,Iris-setosa\n5.1,x,1.4,0.2,Iris-setosa\n").unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 2, .. }));

        let err = parse_iris("5.1,3.5,1.4,0.2,Iris-rosea\n").unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 1, .. }));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse_iris("\n\n"), Err(DataError::Empty)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_iris("/definitely/not/here/iris.data").unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[test]
    fn embedded_data_has_fifty_of_each_species() {
        let records = embedded_iris().unwrap();
        assert_eq!(records.len(), 150);

        let mut counts = [0usize; N_CLASSES];
        for record in &records {
            assert_eq!(record.features.len(), N_FEATURES);
            counts[record.class()] += 1;
        }
        assert_eq!(counts, [50, 50, 50]);

        let setosa_petal: f64 = records[..50].iter().map(|r| r.features[2]).sum();
        assert!((setosa_petal / 50.0 - 1.464).abs() < 1e-9);
    }
}
