use rand::Rng;

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

/// Fully connected layer in row-vector convention: `z = x · W + b`.
///
/// `weights` is `input_size x size`, `biases` is `1 x size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub(crate) weights: Matrix,
    pub(crate) biases: Matrix,
}

impl Layer {
    /// Draws weights first, then biases, from `rng`.
    pub fn new<R: Rng + ?Sized>(input_size: usize, size: usize, rng: &mut R) -> Layer {
        let weights = Matrix::random(input_size, size, rng);
        let biases = Matrix::random(1, size, rng);

        Layer { weights, biases }
    }

    pub fn from_parameters(weights: Matrix, biases: Matrix) -> Result<Layer> {
        if biases.shape() != (1, weights.cols()) {
            return Err(MatrixError::ShapeMismatch {
                op: "layer",
                left: weights.shape(),
                right: biases.shape(),
            });
        }
        Ok(Layer { weights, biases })
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows()
    }

    pub fn size(&self) -> usize {
        self.weights.cols()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    /// Pre-activation `z = input · W + b` for a single `1 x input_size` row.
    pub fn pre_activation(&self, input: &Matrix) -> Result<Matrix> {
        input.dot(&self.weights)?.add(&self.biases)
    }

    /// Returns `(weights_grad, biases_grad)` given `delta = dL/dz` for this
    /// layer and the row that was fed into it.
    pub fn compute_gradients(&self, delta: &Matrix, inputs: &Matrix) -> Result<(Matrix, Matrix)> {
        let weights_grad = inputs.transpose().dot(delta)?;
        Ok((weights_grad, delta.clone()))
    }

    /// Propagates `delta = dL/dz` back through the weights, giving `dL/da` of
    /// the previous layer.
    pub fn back_propagate(&self, delta: &Matrix) -> Result<Matrix> {
        delta.dot(&self.weights.transpose())
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: &Matrix, biases_grad: &Matrix, lr: f64) -> Result<()> {
        self.weights = self.weights.subtract(&weights_grad.scale(lr))?;
        self.biases = self.biases.subtract(&biases_grad.scale(lr))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shapes_follow_row_convention() {
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Layer::new(4, 5, &mut rng);
        assert_eq!(layer.weights().shape(), (4, 5));
        assert_eq!(layer.biases().shape(), (1, 5));
        assert_eq!(layer.input_size(), 4);
        assert_eq!(layer.size(), 5);

        let z = layer.pre_activation(&Matrix::ones(1, 4)).unwrap();
        assert_eq!(z.shape(), (1, 5));
    }

    #[test]
    fn pre_activation_rejects_wrong_width() {
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Layer::new(4, 5, &mut rng);
        assert!(layer.pre_activation(&Matrix::ones(1, 3)).is_err());
    }

    #[test]
    fn from_parameters_checks_bias_width() {
        assert!(Layer::from_parameters(Matrix::zeros(2, 3), Matrix::zeros(1, 2)).is_err());
        assert!(Layer::from_parameters(Matrix::zeros(2, 3), Matrix::zeros(1, 3)).is_ok());
    }

    #[test]
    fn apply_gradients_steps_against_gradient() {
        let mut layer =
            Layer::from_parameters(Matrix::ones(1, 2), Matrix::zeros(1, 2)).unwrap();
        layer
            .apply_gradients(&Matrix::ones(1, 2), &Matrix::ones(1, 2), 0.25)
            .unwrap();
        assert_eq!(layer.weights().to_vec(), vec![vec![0.75, 0.75]]);
        assert_eq!(layer.biases().to_vec(), vec![vec![-0.25, -0.25]]);
    }
}
