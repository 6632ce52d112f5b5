use gmix_core::{DimensionError, MixtureState, PointSet};
use thiserror::Error;

use crate::{density::DensityError, estimate::EstimateError, responsibility::ResponsibilityError};

/// Errors that can occur during an EM iteration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("dimension mismatch: {0}")]
    Dimension(#[from] DimensionError),

    #[error("density evaluation failed for cluster {cluster}")]
    Density {
        cluster: usize,
        #[source]
        source: DensityError,
    },

    #[error("responsibility computation failed")]
    Responsibility(#[from] ResponsibilityError),

    #[error("parameter estimation failed for cluster {cluster}")]
    Estimate {
        cluster: usize,
        #[source]
        source: EstimateError,
    },
}

impl Error {
    /// Checks that the points and the mixture share a dimension.
    pub(crate) fn check_dims(points: &PointSet, state: &MixtureState) -> Result<(), Self> {
        DimensionError::check("point dimension", state.dim(), points.dim())?;
        Ok(())
    }
}


/// A multi-iteration run that failed part-way.
///
/// Carries the states produced by every iteration that succeeded before the
/// failure, so the trajectory so far is not lost.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("iteration {iteration} failed after {} completed", .completed.len())]
pub struct RunError {
    /// The failing iteration, counted from 1 within the run; 0 if the inputs
    /// were rejected before the first iteration.
    pub iteration: usize,

    /// State after each completed iteration, in order. The initial state is
    /// not included.
    pub completed: Vec<MixtureState>,

    /// The error that ended the run.
    #[source]
    pub source: Error,
}
