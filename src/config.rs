use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::train::train_config::TrainConfig;

/// Settings for one end-to-end run of the binary.
///
/// Every field has a default, so a JSON file only needs the keys it changes,
/// e.g. `{ "epochs": 2000, "hidden_size": 8 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Path of an Iris data file; the built-in copy is used when unset.
    pub data_path: Option<String>,
    pub hidden_size: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    /// Log the mean loss every this many epochs; 0 disables it.
    pub report_every: usize,
    /// Share of the records held out for testing, in `[0, 1]`.
    pub test_fraction: f64,
    /// Seeds both the train/test shuffle and weight initialization.
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_path: None,
            hidden_size: 5,
            epochs: 1000,
            learning_rate: 0.5,
            report_every: TrainConfig::DEFAULT_REPORT_EVERY,
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

impl RunConfig {
    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<RunConfig, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<RunConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.learning_rate).with_report_every(self.report_every)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RunConfig::from_json_str(r#"{ "epochs": 2000, "hidden_size": 8 }"#).unwrap();
        assert_eq!(config.epochs, 2000);
        assert_eq!(config.hidden_size, 8);
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn data_path_can_name_a_file() {
        let config = RunConfig::from_json_str(r#"{ "data_path": "/tmp/iris.data" }"#).unwrap();
        assert_eq!(config.data_path.as_deref(), Some("/tmp/iris.data"));
        assert_eq!(config.epochs, 1000);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            RunConfig::from_json_str("{ epochs: }"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_json_reads_a_file() {
        let path = std::env::temp_dir().join(format!("iris-nn-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "learning_rate": 0.1, "report_every": 0 }"#).unwrap();

        let config = RunConfig::load_json(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.learning_rate, 0.1);
        let train = config.train_config();
        assert_eq!(train.epochs, 1000);
        assert_eq!(train.report_every, 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            RunConfig::load_json("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
