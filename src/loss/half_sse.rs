use crate::error::Result;
use crate::math::matrix::Matrix;

/// Half sum of squared errors, `sum((p - a)^2) / 2`.
pub struct HalfSquaredError;

impl HalfSquaredError {
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        let diff = predicted.subtract(expected)?;
        let mut sum = 0.0;
        for r in 0..diff.rows() {
            sum += diff.row(r).iter().map(|d| d * d).sum::<f64>();
        }
        Ok(sum / 2.0)
    }
}
