use ndarray::{Array2, ArrayView1, ArrayView2};
use thiserror::Error;

use crate::DimensionError;

/// An ordered, immutable set of N points of dimension D.
///
/// Points are stored row-wise: row `i` is point `i`. Every coordinate is
/// finite.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    data: Array2<f64>,
}

/// Errors that can occur when constructing a [`PointSet`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PointSetError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("coordinate {dim} of point {point} is not finite: {value}")]
    NonFinite {
        point: usize,
        dim: usize,
        value: f64,
    },
}

impl PointSet {
    /// Wraps an N×D matrix whose rows are the points.
    ///
    /// # Errors
    ///
    /// Returns [`PointSetError::Dimension`] if N or D is zero, and
    /// [`PointSetError::NonFinite`] for the first NaN or infinite coordinate.
    pub fn new(data: Array2<f64>) -> Result<Self, PointSetError> {
        let (n, d) = data.dim();
        if n == 0 {
            return Err(DimensionError::Empty("point set").into());
        }
        if d == 0 {
            return Err(DimensionError::Empty("point dimension").into());
        }

        if let Some(((point, dim), &value)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(PointSetError::NonFinite { point, dim, value });
        }

        Ok(Self { data })
    }

    /// Builds a point set from a sequence of rows.
    ///
    /// The dimension is taken from the first row; every other row must match.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Empty`] if there are no rows or the rows are
    /// empty, [`DimensionError::Mismatch`] if any row is ragged, and
    /// [`PointSetError::NonFinite`] for a NaN or infinite coordinate.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, PointSetError> {
        let first = rows.first().ok_or(DimensionError::Empty("point set"))?;
        let dim = first.as_ref().len();
        for row in rows {
            DimensionError::check("point dimension", dim, row.as_ref().len())?;
        }

        Self::new(Array2::from_shape_fn((rows.len(), dim), |(i, j)| {
            rows[i].as_ref()[j]
        }))
    }

    /// Returns the number of points (N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Always `false`; construction rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the dimension of every point (D).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.ncols()
    }

    /// Returns point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    /// Returns a view of the whole N×D matrix.
    #[must_use]
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }
}
