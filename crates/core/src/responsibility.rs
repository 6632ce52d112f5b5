use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use thiserror::Error;

use crate::DimensionError;

/// Tolerance on each row sum of a responsibility matrix.
const ROW_SUM_TOL: f64 = 1e-9;

/// The N×K matrix of point-to-cluster membership weights.
///
/// Every entry lies in `[0, 1]` and every row sums to 1, so each point's
/// probability mass is fully distributed across the K clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsibilityMatrix {
    weights: Array2<f64>,
}

/// Errors that can occur when wrapping a weight matrix.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WeightsError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("weight for point {point}, cluster {cluster} is outside [0, 1]: {value}")]
    OutOfRange {
        point: usize,
        cluster: usize,
        value: f64,
    },

    #[error("weights for point {point} sum to {sum}, not 1")]
    NotNormalized { point: usize, sum: f64 },
}

impl ResponsibilityMatrix {
    /// Wraps an N×K matrix of normalized weights.
    ///
    /// # Errors
    ///
    /// Returns [`WeightsError::Dimension`] if N or K is zero,
    /// [`WeightsError::OutOfRange`] for an entry outside `[0, 1]` (including
    /// NaN), and [`WeightsError::NotNormalized`] for a row whose sum differs
    /// from 1 by more than `1e-9`.
    pub fn new(weights: Array2<f64>) -> Result<Self, WeightsError> {
        if weights.nrows() == 0 {
            return Err(DimensionError::Empty("responsibility rows").into());
        }
        if weights.ncols() == 0 {
            return Err(DimensionError::Empty("responsibility columns").into());
        }

        for (point, row) in weights.axis_iter(Axis(0)).enumerate() {
            if let Some((cluster, &value)) = row
                .iter()
                .enumerate()
                .find(|&(_, w)| !(0.0..=1.0).contains(w))
            {
                return Err(WeightsError::OutOfRange {
                    point,
                    cluster,
                    value,
                });
            }
            let sum = row.sum();
            if (sum - 1.0).abs() > ROW_SUM_TOL {
                return Err(WeightsError::NotNormalized { point, sum });
            }
        }

        Ok(Self { weights })
    }

    /// Returns the number of points (N).
    #[must_use]
    pub fn points(&self) -> usize {
        self.weights.nrows()
    }

    /// Returns the number of clusters (K).
    #[must_use]
    pub fn clusters(&self) -> usize {
        self.weights.ncols()
    }

    /// Returns the weights of point `i` across all clusters.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.points()`.
    #[must_use]
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.weights.row(i)
    }

    /// Returns the weights of cluster `k` across all points.
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.clusters()`.
    #[must_use]
    pub fn column(&self, k: usize) -> ArrayView1<'_, f64> {
        self.weights.column(k)
    }

    /// Returns a view of the full N×K matrix.
    #[must_use]
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    /// Returns, for each point, the cluster with the largest weight.
    ///
    /// Ties go to the lowest cluster index.
    #[must_use]
    pub fn assignments(&self) -> Vec<usize> {
        self.weights
            .axis_iter(Axis(0))
            .map(|row| {
                row.iter()
                    .enumerate()
                    .fold((0, f64::NEG_INFINITY), |best, (k, &w)| {
                        if w > best.1 { (k, w) } else { best }
                    })
                    .0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn accepts_normalized_rows() {
        let matrix = ResponsibilityMatrix::new(array![[0.25, 0.75], [1.0, 0.0]]).unwrap();

        assert_eq!(matrix.points(), 2);
        assert_eq!(matrix.clusters(), 2);
        assert_eq!(matrix.column(1), array![0.75, 0.0]);
    }

    #[test]
    fn rejects_unnormalized_row() {
        let err = ResponsibilityMatrix::new(array![[0.5, 0.5], [0.5, 0.4]]).unwrap_err();

        assert!(matches!(err, WeightsError::NotNormalized { point: 1, .. }));
    }

    #[test]
    fn rejects_nan_weight() {
        let err = ResponsibilityMatrix::new(array![[f64::NAN, 1.0]]).unwrap_err();

        assert!(matches!(
            err,
            WeightsError::OutOfRange {
                point: 0,
                cluster: 0,
                ..
            }
        ));
    }

    #[test]
    fn assignments_pick_heaviest_cluster() {
        let matrix =
            ResponsibilityMatrix::new(array![[0.1, 0.9], [0.6, 0.4], [0.5, 0.5]]).unwrap();

        assert_eq!(matrix.assignments(), vec![1, 0, 0]);
    }
}
