use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};

/// Seed used by [`Matrix::new`] when no generator is supplied.
pub const DEFAULT_SEED: u64 = 42;

/// Upper bound (exclusive) of the values a freshly initialized matrix holds.
pub const INIT_SCALE: f64 = 0.1;

/// Dense row-major matrix of `f64`.
///
/// The shape is fixed at construction. Every algebraic operation returns a new
/// matrix; only [`Matrix::set`] and `IndexMut` write to an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Allocates a `rows`x`cols` matrix filled with values in `[0, 0.1)` drawn
    /// from a generator seeded with [`DEFAULT_SEED`].
    ///
    /// Two calls with the same shape yield the same values.
    pub fn new(rows: usize, cols: usize) -> Matrix {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        Matrix::random(rows, cols, &mut rng)
    }

    /// Like [`Matrix::new`] but draws from the caller's generator, so several
    /// matrices can share one stream.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(0.0..INIT_SCALE);
            }
        }

        res
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 1.0)
    }

    fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![value; cols]; rows],
        }
    }

    /// Builds a matrix from nested rows. Ragged input is rejected.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map(|row| row.len()).unwrap_or(0);

        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(MatrixError::ShapeMismatch {
                op: "from_data",
                left: (rows, cols),
                right: (1, bad.len()),
            });
        }

        Ok(Matrix { rows, cols, data })
    }

    /// A single-row matrix (1 x `row.len()`).
    pub fn from_row(row: Vec<f64>) -> Matrix {
        Matrix {
            rows: 1,
            cols: row.len(),
            data: vec![row],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// # Panics
    /// Panics if `(row, col)` is out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// # Panics
    /// Panics if `(row, col)` is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row]
    }

    pub fn to_vec(&self) -> Vec<Vec<f64>> {
        self.data.clone()
    }

    /// Matrix product `self · rhs`.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(self.mismatch("dot", rhs));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("add", rhs, |a, b| a + b)
    }

    pub fn subtract(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("subtract", rhs, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("hadamard", rhs, |a, b| a * b)
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        self.map(|x| x * scalar)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Column index of the largest value in `row`. Ties resolve to the lowest
    /// index; an empty row yields 0.
    pub fn argmax_row(&self, row: usize) -> usize {
        let mut best = 0;
        for (j, &x) in self.data[row].iter().enumerate() {
            if x > self.data[row][best] {
                best = j;
            }
        }
        best
    }

    fn zip_with<F>(&self, op: &'static str, rhs: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(self.mismatch(op, rhs));
        }

        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(&a, &b)| f(a, b)).collect())
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    fn mismatch(&self, op: &'static str, rhs: &Matrix) -> MatrixError {
        MatrixError::ShapeMismatch {
            op,
            left: self.shape(),
            right: rhs.shape(),
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: vec![],
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_seeded_and_in_range() {
        let a = Matrix::new(3, 4);
        let b = Matrix::new(3, 4);
        assert_eq!(a, b);
        assert_eq!(a.shape(), (3, 4));
        for row in a.to_vec() {
            for x in row {
                assert!((0.0..INIT_SCALE).contains(&x));
            }
        }
    }

    #[test]
    fn empty_shapes() {
        let m = Matrix::new(0, 5);
        assert_eq!(m.shape(), (0, 5));
        assert_eq!(Matrix::default().shape(), (0, 0));
        assert_eq!(Matrix::from_data(vec![]).unwrap().shape(), (0, 0));
    }

    #[test]
    fn get_set_and_index() {
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 1, 3.5);
        m[(1, 0)] = -1.0;
        assert_eq!(m.get(0, 1), 3.5);
        assert_eq!(m[(1, 0)], -1.0);
        assert_eq!(m.get(1, 1), 0.0);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        Matrix::zeros(2, 2).get(2, 0);
    }

    #[test]
    fn from_data_rejects_ragged_rows() {
        let res = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            res,
            Err(MatrixError::ShapeMismatch { op: "from_data", .. })
        ));
    }

    #[test]
    fn dot_known_product() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_data(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
        let c = a.dot(&b).unwrap();
        assert_eq!(c.to_vec(), vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
    }

    #[test]
    fn dot_shape_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        assert_eq!(
            a.dot(&b),
            Err(MatrixError::ShapeMismatch {
                op: "dot",
                left: (2, 3),
                right: (2, 3),
            })
        );
    }

    #[test]
    fn cellwise_ops() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_data(vec![vec![0.5, -1.0], vec![2.0, 0.0]]).unwrap();

        assert_eq!(a.add(&b).unwrap().to_vec(), vec![vec![1.5, 1.0], vec![5.0, 4.0]]);
        assert_eq!(a.subtract(&b).unwrap().to_vec(), vec![vec![0.5, 3.0], vec![1.0, 4.0]]);
        assert_eq!(a.hadamard(&b).unwrap().to_vec(), vec![vec![0.5, -2.0], vec![6.0, 0.0]]);
        assert_eq!(a.scale(2.0).to_vec(), vec![vec![2.0, 4.0], vec![6.0, 8.0]]);
        assert_eq!(a.map(|x| x * x).to_vec(), vec![vec![1.0, 4.0], vec![9.0, 16.0]]);
    }

    #[test]
    fn cellwise_shape_mismatch() {
        let a = Matrix::zeros(1, 3);
        let b = Matrix::zeros(3, 1);
        assert!(a.add(&b).is_err());
        assert!(a.subtract(&b).is_err());
        assert!(a.hadamard(&b).is_err());
    }

    #[test]
    fn transpose_swaps_indices() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(2, 0)], 3.0);
        assert_eq!(t[(0, 1)], 4.0);
    }

    #[test]
    fn operations_do_not_mutate_operands() {
        let a = Matrix::new(2, 2);
        let snapshot = a.clone();
        let _ = a.add(&a).unwrap();
        let _ = a.scale(3.0);
        let _ = a.transpose();
        assert_eq!(a, snapshot);
    }

    #[test]
    fn argmax_ties_pick_first() {
        let m = Matrix::from_row(vec![0.2, 0.7, 0.7, 0.1]);
        assert_eq!(m.argmax_row(0), 1);
        assert_eq!(Matrix::from_row(vec![]).argmax_row(0), 0);
    }
}
