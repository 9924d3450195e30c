use tracing::{debug, info};

use crate::data::record::Record;
use crate::error::Result;
use crate::network::network::FeedForwardNetwork;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of online gradient descent
/// (one update per record, records visited in the given order).
///
/// Returns one [`EpochStats`] per epoch. Records are never shuffled here;
/// shuffling belongs to data preparation and happens once, before training.
pub fn train_loop(
    network: &mut FeedForwardNetwork,
    records: &[Record],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        let mean_loss = run_one_epoch(network, records, config.learning_rate)?;
        let stats = EpochStats { epoch, mean_loss };

        if config.reports(epoch) {
            info!("Epoch {}, mean loss: {:.6}", epoch, mean_loss);
        }

        history.push(stats);
    }

    Ok(history)
}

/// Percentage (0 to 100) of `records` whose predicted class matches the
/// label. An empty slice scores 0. Leaves the last record's pass cached on
/// `network`.
pub fn evaluate(network: &mut FeedForwardNetwork, records: &[Record]) -> Result<f64> {
    if records.is_empty() {
        return Ok(0.0);
    }

    let mut correct = 0usize;
    for record in records {
        let output = network.forward(&record.feature_row())?;
        if output.argmax_row(0) == record.class() {
            correct += 1;
        }
    }

    let accuracy = correct as f64 / records.len() as f64 * 100.0;
    debug!("{}/{} records classified correctly", correct, records.len());
    Ok(accuracy)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over `records`; returns the mean loss measured before each
/// record's update. Each record's pass is cached on `network`.
fn run_one_epoch(network: &mut FeedForwardNetwork, records: &[Record], learning_rate: f64) -> Result<f64> {
    if records.is_empty() {
        return Ok(0.0);
    }

    let mut total_loss = 0.0;

    for record in records {
        let input = record.feature_row();
        let expected = record.label_row();

        let pass = network.propagate(&input)?;
        total_loss += FeedForwardNetwork::loss(pass.output(), &expected)?;

        let gradients = network.backward(&pass, &expected)?;
        network.record_pass(pass);
        network.update_weights(&gradients, learning_rate)?;
    }

    Ok(total_loss / records.len() as f64)
}
