//! Multivariate normal probability density.
//!
//! For a point `x`, mean `μ`, and covariance `Σ` of dimension D:
//!
//! ```text
//! density = (2π)^(-D/2) · |Σ|^(-1/2) · exp(-½ (x-μ)ᵀ Σ⁻¹ (x-μ))
//! ```
//!
//! The covariance is Cholesky-factored once per [`Gaussian`]; a matrix that
//! cannot be factored is rejected with [`DensityError::InvalidCovariance`]
//! instead of producing NaN densities.

use std::f64::consts::TAU;

use gmix_core::{ClusterParameters, DimensionError, PointSet};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use thiserror::Error;

/// Errors that can occur when evaluating a density.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DensityError {
    #[error("covariance matrix is not positive definite")]
    InvalidCovariance,

    #[error(transparent)]
    Dimension(#[from] DimensionError),
}

/// A multivariate normal distribution prepared for repeated evaluation.
#[derive(Debug, Clone)]
pub struct Gaussian {
    mean: Array1<f64>,
    precision: Array2<f64>,
    norm: f64,
}

impl Gaussian {
    /// Factors the covariance of `params` and caches its inverse.
    ///
    /// # Errors
    ///
    /// Returns [`DensityError::InvalidCovariance`] if the covariance is not
    /// positive definite or its determinant is not a positive finite number.
    pub fn new(params: &ClusterParameters) -> Result<Self, DensityError> {
        let dim = params.dim();
        let covariance = params.covariance();

        let matrix = DMatrix::from_fn(dim, dim, |i, j| covariance[[i, j]]);
        let cholesky = matrix
            .cholesky()
            .ok_or(DensityError::InvalidCovariance)?;

        let determinant = cholesky.determinant();
        if !determinant.is_finite() || determinant <= 0.0 {
            return Err(DensityError::InvalidCovariance);
        }

        let inverse = cholesky.inverse();
        let precision = Array2::from_shape_fn((dim, dim), |(i, j)| inverse[(i, j)]);

        #[allow(clippy::cast_precision_loss)]
        let norm = (-0.5 * (dim as f64 * TAU.ln() + determinant.ln())).exp();

        Ok(Self {
            mean: params.mean().clone(),
            precision,
            norm,
        })
    }

    /// Returns the dimension D.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Evaluates the density at a single point.
    ///
    /// # Errors
    ///
    /// Returns [`DensityError::Dimension`] if `x` does not have length D.
    pub fn pdf(&self, x: ArrayView1<'_, f64>) -> Result<f64, DensityError> {
        DimensionError::check("point dimension", self.dim(), x.len())?;

        let centered = &x - &self.mean;
        let mahalanobis = centered.dot(&self.precision.dot(&centered));
        Ok(self.norm * (-0.5 * mahalanobis).exp())
    }

    /// Evaluates the density at every point, in point order.
    ///
    /// # Errors
    ///
    /// Returns [`DensityError::Dimension`] if the points are not of dimension D.
    pub fn pdf_batch(&self, points: &PointSet) -> Result<Array1<f64>, DensityError> {
        DimensionError::check("point dimension", self.dim(), points.dim())?;

        let centered = &points.view() - &self.mean;
        let projected = centered.dot(&self.precision);
        let mahalanobis = (&centered * &projected).sum_axis(Axis(1));

        Ok(mahalanobis.mapv(|q| self.norm * (-0.5 * q).exp()))
    }
}

/// Evaluates the density of one cluster at every point of a point set.
///
/// # Errors
///
/// Returns [`DensityError::InvalidCovariance`] for a covariance that is not
/// positive definite, or [`DensityError::Dimension`] on a shape mismatch.
pub fn densities(points: &PointSet, params: &ClusterParameters) -> Result<Array1<f64>, DensityError> {
    Gaussian::new(params)?.pdf_batch(points)
}
