use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::data::record::Record;
use crate::error::DataError;

/// Normalized training and test splits.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub train: Vec<Record>,
    pub test: Vec<Record>,
}

/// Per-feature min-max scaling to `[0, 1]`, fitted on one set of records and
/// applied to any other.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl MinMaxScaler {
    pub fn fit(records: &[Record]) -> Result<MinMaxScaler, DataError> {
        let first = records.first().ok_or(DataError::Empty)?;
        let mut min = first.features.clone();
        let mut max = first.features.clone();

        for record in &records[1..] {
            for (j, &x) in record.features.iter().enumerate().take(min.len()) {
                min[j] = min[j].min(x);
                max[j] = max[j].max(x);
            }
        }

        Ok(MinMaxScaler { min, max })
    }

    pub fn min(&self) -> &[f64] {
        &self.min
    }

    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Maps each feature to `(x - min) / (max - min)`. A feature that was
    /// constant in the fitted set maps to 0.
    pub fn transform(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .map(|record| {
                let features = record
                    .features
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| self.scale_feature(j, x))
                    .collect();
                Record::new(features, record.label.clone())
            })
            .collect()
    }

    fn scale_feature(&self, j: usize, x: f64) -> f64 {
        let (lo, hi) = match (self.min.get(j), self.max.get(j)) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => return x,
        };
        let range = hi - lo;
        if range == 0.0 {
            0.0
        } else {
            (x - lo) / range
        }
    }
}

/// Shuffles `records` in place.
pub fn shuffle<R: Rng + ?Sized>(records: &mut [Record], rng: &mut R) {
    records.shuffle(rng);
}

/// Shuffles a copy of `records` and splits it into `(train, test)`; the test
/// set takes the first `round(n * test_fraction)` shuffled records.
pub fn train_test_split<R: Rng + ?Sized>(
    records: &[Record],
    test_fraction: f64,
    rng: &mut R,
) -> Result<(Vec<Record>, Vec<Record>), DataError> {
    if !(0.0..=1.0).contains(&test_fraction) {
        return Err(DataError::InvalidSplit(test_fraction));
    }

    let mut shuffled = records.to_vec();
    shuffle(&mut shuffled, rng);

    let n_test = (shuffled.len() as f64 * test_fraction).round() as usize;
    let train = shuffled.split_off(n_test);

    Ok((train, shuffled))
}

/// Splits, then normalizes both splits with a scaler fitted on the training
/// split only.
pub fn prepare<R: Rng + ?Sized>(
    records: &[Record],
    test_fraction: f64,
    rng: &mut R,
) -> Result<Dataset, DataError> {
    let (train, test) = train_test_split(records, test_fraction, rng)?;
    let scaler = MinMaxScaler::fit(&train)?;
    debug!(
        "split {} records into {} train / {} test",
        records.len(),
        train.len(),
        test.len()
    );

    Ok(Dataset {
        train: scaler.transform(&train),
        test: scaler.transform(&test),
    })
}
