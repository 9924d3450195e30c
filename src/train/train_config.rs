/// Hyperparameters for a [`train_loop`](crate::train::train_loop) run.
///
/// # Fields
/// - `epochs`: full passes over the training records
/// - `learning_rate`: step size of plain gradient descent
/// - `report_every`: log the mean loss when `epoch % report_every == 0`;
///   `0` disables the report
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub report_every: usize,
}

impl TrainConfig {
    pub const DEFAULT_REPORT_EVERY: usize = 100;

    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            report_every: Self::DEFAULT_REPORT_EVERY,
        }
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    /// Whether `epoch` is one of the periodically reported epochs.
    pub fn reports(&self, epoch: usize) -> bool {
        self.report_every > 0 && epoch % self.report_every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_schedule() {
        let config = TrainConfig::new(1000, 0.5);
        assert!(config.reports(0));
        assert!(config.reports(100));
        assert!(!config.reports(150));

        let silent = config.with_report_every(0);
        assert!(!silent.reports(0));
    }
}
