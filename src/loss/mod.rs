pub mod bce;
pub mod half_sse;

pub use bce::BceLoss;
pub use half_sse::HalfSquaredError;
