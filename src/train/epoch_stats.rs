use serde::{Deserialize, Serialize};

/// Statistics of one completed training epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Mean per-record loss over the epoch.
    pub mean_loss: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_epoch_and_loss_only() {
        let stats = EpochStats { epoch: 3, mean_loss: 0.25 };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json, serde_json::json!({ "epoch": 3, "mean_loss": 0.25 }));
    }
}
