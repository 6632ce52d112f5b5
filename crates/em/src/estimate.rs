//! Re-estimates one cluster's parameters from its weights (the M-step).
//!
//! Given point weights `w` (one responsibility column) and a centering mean
//! `c`:
//!
//! ```text
//! mean       = Σ_i w_i x_i / Σ_i w_i
//! covariance = Σ_i w_i (x_i - c)(x_i - c)ᵀ / Σ_i w_i
//! ```
//!
//! The covariance is centred on the caller-supplied mean, which the driver
//! sets to the cluster's mean from *before* the step. Centering on the old
//! mean changes the convergence path, so it is an explicit argument rather
//! than being recomputed here.

use gmix_core::{ClusterParameters, DimensionError, ParameterError, PointSet};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use thiserror::Error;

/// Errors that can occur when re-estimating cluster parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("weight for point {point} is not a finite non-negative number: {value}")]
    InvalidWeight { point: usize, value: f64 },

    #[error("total weight {total} cannot be normalized")]
    DegenerateWeights { total: f64 },

    #[error(transparent)]
    Parameters(#[from] ParameterError),
}

/// Computes the weighted mean of the points.
///
/// # Errors
///
/// Returns [`EstimateError::Dimension`] if `weights` does not have one entry
/// per point, [`EstimateError::InvalidWeight`] for a negative or non-finite
/// weight, and [`EstimateError::DegenerateWeights`] if the weights sum to zero.
pub fn estimate_mean(
    points: &PointSet,
    weights: ArrayView1<'_, f64>,
) -> Result<Array1<f64>, EstimateError> {
    let total = total_weight(points, weights)?;
    Ok(weights.dot(&points.view()) / total)
}

/// Computes the weighted covariance of the points about `center`.
///
/// Normalized by the total weight (reliability-weight semantics, no
/// small-sample correction). The result is exactly symmetric.
///
/// # Errors
///
/// Returns the same errors as [`estimate_mean`], plus
/// [`EstimateError::Dimension`] if `center` is not of the point dimension.
pub fn estimate_covariance(
    points: &PointSet,
    weights: ArrayView1<'_, f64>,
    center: ArrayView1<'_, f64>,
) -> Result<Array2<f64>, EstimateError> {
    DimensionError::check("center dimension", points.dim(), center.len())?;
    let total = total_weight(points, weights)?;

    let centered = &points.view() - &center;
    let weighted = &centered * &weights.insert_axis(Axis(1));
    let mut covariance = weighted.t().dot(&centered) / total;

    let dim = covariance.nrows();
    for row in 0..dim {
        for col in (row + 1)..dim {
            covariance[[row, col]] = covariance[[col, row]];
        }
    }

    Ok(covariance)
}

/// Re-estimates a cluster's mean and covariance.
///
/// The new mean is the weighted mean of the points; the new covariance is the
/// weighted covariance about `old_mean`.
///
/// # Errors
///
/// Returns the errors of [`estimate_mean`] and [`estimate_covariance`].
pub fn estimate(
    points: &PointSet,
    weights: ArrayView1<'_, f64>,
    old_mean: ArrayView1<'_, f64>,
) -> Result<ClusterParameters, EstimateError> {
    let covariance = estimate_covariance(points, weights, old_mean)?;
    let mean = estimate_mean(points, weights)?;
    Ok(ClusterParameters::new(mean, covariance)?)
}

/// Validates the weights and returns their sum.
fn total_weight(points: &PointSet, weights: ArrayView1<'_, f64>) -> Result<f64, EstimateError> {
    DimensionError::check("weight count", points.len(), weights.len())?;

    if let Some((point, &value)) = weights
        .iter()
        .enumerate()
        .find(|&(_, w)| !w.is_finite() || *w < 0.0)
    {
        return Err(EstimateError::InvalidWeight { point, value });
    }

    let total = weights.sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(EstimateError::DegenerateWeights { total });
    }
    Ok(total)
}
