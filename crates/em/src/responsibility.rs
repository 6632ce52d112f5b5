//! Normalizes per-cluster densities into membership weights (the E-step).
//!
//! For point `i` and cluster `k`:
//!
//! ```text
//! responsibility[i][k] = density_k[i] / Σ_j density_j[i]
//! ```
//!
//! A point where every cluster density is zero (typically underflow far from
//! every current Gaussian) has no defined normalization; [`ZeroDensityPolicy`]
//! decides what happens to it.

use gmix_core::{DimensionError, ResponsibilityMatrix, WeightsError};
use ndarray::{Array1, Array2};
use thiserror::Error;

/// How to treat a point whose densities sum to zero across all clusters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroDensityPolicy {
    /// Assign responsibility `1/K` to every cluster for that point.
    #[default]
    Uniform,

    /// Fail with [`ResponsibilityError::ZeroTotalDensity`].
    Fail,
}

/// Errors that can occur when computing responsibilities.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResponsibilityError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("total density at point {point} is zero")]
    ZeroTotalDensity { point: usize },

    #[error("density for point {point}, cluster {cluster} is not a finite non-negative number")]
    InvalidDensity { point: usize, cluster: usize },

    #[error(transparent)]
    Weights(#[from] WeightsError),
}

/// Builds the N×K responsibility matrix from one density array per cluster.
///
/// # Errors
///
/// Returns [`ResponsibilityError::Dimension`] if there are no clusters, no
/// points, or the arrays differ in length; [`ResponsibilityError::InvalidDensity`]
/// for a negative or non-finite density; and
/// [`ResponsibilityError::ZeroTotalDensity`] for a zero-total point when the
/// policy is [`ZeroDensityPolicy::Fail`].
pub fn responsibilities(
    densities: &[Array1<f64>],
    policy: ZeroDensityPolicy,
) -> Result<ResponsibilityMatrix, ResponsibilityError> {
    let first = densities
        .first()
        .ok_or(DimensionError::Empty("cluster densities"))?;
    let n = first.len();
    if n == 0 {
        return Err(DimensionError::Empty("point densities").into());
    }
    for column in densities {
        DimensionError::check("density length", n, column.len())?;
    }

    let k = densities.len();
    #[allow(clippy::cast_precision_loss)]
    let uniform = 1.0 / k as f64;
    let mut weights = Array2::<f64>::zeros((n, k));
    let mut fallbacks = 0_usize;

    for point in 0..n {
        let mut total = 0.0;
        for (cluster, column) in densities.iter().enumerate() {
            let value = column[point];
            if !value.is_finite() || value < 0.0 {
                return Err(ResponsibilityError::InvalidDensity { point, cluster });
            }
            total += value;
        }

        if total > 0.0 {
            for (cluster, column) in densities.iter().enumerate() {
                weights[[point, cluster]] = column[point] / total;
            }
            continue;
        }

        match policy {
            ZeroDensityPolicy::Fail => {
                return Err(ResponsibilityError::ZeroTotalDensity { point });
            }
            ZeroDensityPolicy::Uniform => {
                weights.row_mut(point).fill(uniform);
                fallbacks += 1;
            }
        }
    }

    if fallbacks > 0 {
        log::warn!("{fallbacks} of {n} points had zero total density; assigned uniform responsibility");
    }

    Ok(ResponsibilityMatrix::new(weights)?)
}
