pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use config::RunConfig;
pub use data::record::Record;
pub use error::{MatrixError, Result};
pub use math::matrix::Matrix;
pub use network::{FeedForwardNetwork, ForwardPass, Gradients};
pub use train::{EpochStats, TrainConfig};
