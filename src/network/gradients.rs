use crate::math::matrix::Matrix;

/// Per-parameter gradients produced by one backward pass.
///
/// Each field has the shape of the parameter it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub dw1: Matrix,
    pub db1: Matrix,
    pub dw2: Matrix,
    pub db2: Matrix,
}
