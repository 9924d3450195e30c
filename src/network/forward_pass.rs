use crate::math::matrix::Matrix;

/// Intermediate values of one forward pass, kept for backpropagation.
///
/// Returned by [`FeedForwardNetwork::propagate`] and handed back to
/// [`FeedForwardNetwork::backward`], so the gradient always refers to the pass
/// it was computed from.
///
/// [`FeedForwardNetwork::propagate`]: crate::network::FeedForwardNetwork::propagate
/// [`FeedForwardNetwork::backward`]: crate::network::FeedForwardNetwork::backward
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    /// `1 x I` input row
    pub input: Matrix,
    /// `input · W1 + b1`
    pub z1: Matrix,
    /// `sigmoid(z1)`
    pub a1: Matrix,
    /// `a1 · W2 + b2`
    pub z2: Matrix,
    /// `sigmoid(z2)`, the prediction
    pub a2: Matrix,
}

impl ForwardPass {
    pub fn output(&self) -> &Matrix {
        &self.a2
    }

    pub fn predicted_class(&self) -> usize {
        self.a2.argmax_row(0)
    }
}
