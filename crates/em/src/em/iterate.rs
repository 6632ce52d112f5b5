use gmix_core::{MixtureState, PointSet, ResponsibilityMatrix};
use rayon::prelude::*;

use crate::{density, estimate, responsibility, responsibility::ZeroDensityPolicy};

use super::Error;

/// The outcome of one E/M cycle.
#[derive(Debug, Clone)]
pub struct Iteration {
    /// The re-estimated mixture state.
    pub state: MixtureState,

    /// The responsibilities computed from the previous state.
    pub responsibilities: ResponsibilityMatrix,
}

/// Runs one E/M cycle without side effects.
///
/// The returned state is derived only from `points` and `state`; neither
/// input is modified. When several clusters fail in the same phase, the
/// error for the lowest cluster index is returned.
///
/// # Errors
///
/// Returns [`Error::Dimension`] if the points and state disagree on
/// dimension, [`Error::Density`] if a cluster's covariance is not positive
/// definite, [`Error::Responsibility`] if normalization fails under
/// `policy`, and [`Error::Estimate`] if a cluster's weights are degenerate.
pub fn iterate(
    points: &PointSet,
    state: &MixtureState,
    policy: ZeroDensityPolicy,
) -> Result<Iteration, Error> {
    Error::check_dims(points, state)?;

    log::trace!(
        "e-step: {} clusters over {} points",
        state.len(),
        points.len()
    );
    let densities = state
        .clusters()
        .par_iter()
        .enumerate()
        .map(|(cluster, params)| {
            density::densities(points, params).map_err(|source| Error::Density { cluster, source })
        })
        .collect::<Vec<_>>();
    let densities = lowest_failure(densities)?;

    let responsibilities = responsibility::responsibilities(&densities, policy)?;

    log::trace!("m-step: re-estimating {} clusters", state.len());
    let clusters = state
        .clusters()
        .par_iter()
        .enumerate()
        .map(|(cluster, params)| {
            estimate::estimate(
                points,
                responsibilities.column(cluster),
                params.mean().view(),
            )
            .map_err(|source| Error::Estimate { cluster, source })
        })
        .collect::<Vec<_>>();
    let clusters = lowest_failure(clusters)?;

    Ok(Iteration {
        state: MixtureState::new(clusters)?,
        responsibilities,
    })
}

/// Returns all values, or the first error in cluster order.
///
/// Every cluster runs to completion first, so the reported error does not
/// depend on thread scheduling.
fn lowest_failure<T>(results: Vec<Result<T, Error>>) -> Result<Vec<T>, Error> {
    results.into_iter().collect()
}
