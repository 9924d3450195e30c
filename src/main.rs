use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use iris_nn::data::iris::{self, N_CLASSES, N_FEATURES};
use iris_nn::data::prepare;
use iris_nn::{FeedForwardNetwork, RunConfig};

/// Environment variable naming an optional JSON run configuration.
const CONFIG_ENV: &str = "IRIS_NN_CONFIG";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => RunConfig::load_json(&path)
            .with_context(|| format!("failed to read run configuration {path}"))?,
        Err(_) => RunConfig::default(),
    };
    info!("{:?}", config);

    let records = match &config.data_path {
        Some(path) => iris::load_iris(path).with_context(|| format!("failed to load {path}"))?,
        None => iris::embedded_iris().context("failed to parse the built-in data set")?,
    };

    let mut rng = StdRng::seed_from_u64(config.seed);
    let dataset = prepare::prepare(&records, config.test_fraction, &mut rng)?;
    info!(
        "{} training records, {} test records",
        dataset.train.len(),
        dataset.test.len()
    );

    let mut network = FeedForwardNetwork::with_seed(N_FEATURES, config.hidden_size, N_CLASSES, config.seed);
    let history = network.train(&dataset.train, &config.train_config())?;

    if let Some(last) = history.last() {
        info!("final epoch {}, mean loss: {:.6}", last.epoch, last.mean_loss);
    }
    info!("train accuracy: {:.2}%", network.evaluate(&dataset.train)?);
    info!("test accuracy: {:.2}%", network.evaluate(&dataset.test)?);

    Ok(())
}
