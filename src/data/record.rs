use serde::{Deserialize, Serialize};

use crate::math::matrix::Matrix;

/// One labeled sample: a feature vector and a one-hot class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub features: Vec<f64>,
    pub label: Vec<f64>,
}

impl Record {
    pub fn new(features: Vec<f64>, label: Vec<f64>) -> Record {
        Record { features, label }
    }

    /// Builds the one-hot label for `class` out of `n_classes`.
    ///
    /// # Panics
    /// Panics if `class >= n_classes`.
    pub fn with_class(features: Vec<f64>, class: usize, n_classes: usize) -> Record {
        assert!(class < n_classes, "class {class} out of range for {n_classes} classes");
        let mut label = vec![0.0; n_classes];
        label[class] = 1.0;
        Record { features, label }
    }

    /// `1 x features.len()` input row.
    pub fn feature_row(&self) -> Matrix {
        Matrix::from_row(self.features.clone())
    }

    /// `1 x label.len()` target row.
    pub fn label_row(&self) -> Matrix {
        Matrix::from_row(self.label.clone())
    }

    /// Index of the hot entry (first maximum).
    pub fn class(&self) -> usize {
        self.label_row().argmax_row(0)
    }
}
