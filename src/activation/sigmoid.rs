use crate::error::Result;
use crate::math::matrix::Matrix;

/// Logistic sigmoid, `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative expressed through activations: for `a = sigmoid(z)`,
/// `sigmoid'(z) = a ⊙ (1 - a)`.
pub fn sigmoid_slope(a: &Matrix) -> Result<Matrix> {
    Matrix::ones(a.rows(), a.cols()).subtract(a)?.hadamard(a)
}
