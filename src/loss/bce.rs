use crate::error::Result;
use crate::math::matrix::Matrix;

const EPS: f64 = 1e-12;

/// Binary cross-entropy summed over sigmoid outputs,
/// `-sum(y·ln(p+ε) + (1-y)·ln(1-p+ε))`.
pub struct BceLoss;

impl BceLoss {
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        // shape check only
        predicted.subtract(expected)?;
        let mut sum = 0.0;
        for r in 0..predicted.rows() {
            for (&p, &y) in predicted.row(r).iter().zip(expected.row(r)) {
                sum -= y * (p + EPS).ln() + (1.0 - y) * (1.0 - p + EPS).ln();
            }
        }
        Ok(sum)
    }

    /// Gradient with respect to the sigmoid's input `z` (not `p`): the
    /// sigmoid slope cancels, leaving `p - y`.
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Result<Matrix> {
        predicted.subtract(expected)
    }
}
