use gmix_core::{MixtureState, Observer};
use thiserror::Error;

use crate::traits::{CanStopEarly, HasState};

/// Stops a run once cluster means stop moving.
///
/// After each observed state, the largest Euclidean distance any cluster
/// mean moved since the previous state is compared against `tolerance`. The
/// run is stopped once that shift is within tolerance and at least
/// `min_iterations` iterations have completed.
///
/// Also implemented for `&mut MeanShift`, so the caller can inspect
/// [`last_shift`](MeanShift::last_shift) after the run.
#[derive(Debug, Clone)]
pub struct MeanShift {
    tolerance: f64,
    min_iterations: usize,
    previous: Option<MixtureState>,
    last_shift: Option<f64>,
}

/// Errors that can occur when configuring a [`MeanShift`] observer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MeanShiftError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl MeanShift {
    /// Creates an observer with the given shift tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn new(tolerance: f64, min_iterations: usize) -> Result<Self, MeanShiftError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(MeanShiftError::Tolerance);
        }
        Ok(Self {
            tolerance,
            min_iterations,
            previous: None,
            last_shift: None,
        })
    }

    /// Returns the most recent shift, or `None` before two states were seen.
    #[must_use]
    pub fn last_shift(&self) -> Option<f64> {
        self.last_shift
    }

    fn update(&mut self, iteration: usize, state: &MixtureState) -> bool {
        let shift = self
            .previous
            .as_ref()
            .and_then(|previous| previous.max_mean_shift(state).ok());
        self.previous = Some(state.clone());

        let Some(shift) = shift else {
            return false;
        };
        self.last_shift = Some(shift);

        let converged = iteration >= self.min_iterations && shift <= self.tolerance;
        if converged {
            log::debug!("mean shift {shift:.3e} within tolerance at iteration {iteration}");
        }
        converged
    }
}

impl<E: HasState, A: CanStopEarly> Observer<E, A> for MeanShift {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.update(event.iteration(), event.state())
            .then(A::stop_early)
    }
}

impl<E: HasState, A: CanStopEarly> Observer<E, A> for &mut MeanShift {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
