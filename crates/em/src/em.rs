//! Expectation-Maximization driver for Gaussian mixtures.
//!
//! # Algorithm
//!
//! Each iteration runs one synchronous E/M cycle:
//!
//! 1. Evaluate every cluster's density over the whole point set.
//! 2. Normalize the K density arrays into the N×K responsibility matrix.
//! 3. Re-estimate every cluster from its responsibility column, centering the
//!    covariance on that cluster's mean from before the iteration.
//! 4. Replace the mixture state with the K new estimates.
//!
//! All K updates read the same pre-iteration state and responsibilities, so
//! no cluster sees another cluster's already-updated parameters. Clusters
//! are processed in parallel within each phase.
//!
//! # Driving
//!
//! - [`iterate()`] is the pure single-step primitive.
//! - [`Em`] owns the points and current state and commits one step at a time.
//! - [`solve`] runs a fixed number of iterations, emitting an [`Event`] per
//!   iteration so an observer can record, report, or return
//!   [`Action::StopEarly`] to layer a convergence criterion on top.
//!
//! A failed iteration never commits a partial update: the state from before
//! the iteration stays current and the error is returned. Multi-iteration
//! runs report failures as a [`RunError`] that keeps the states completed
//! before the failure.

mod action;
mod config;
mod driver;
mod error;
mod event;
mod iterate;
mod solution;


pub use action::Action;
pub use config::Config;
pub use driver::Em;
pub use error::{Error, RunError};
pub use event::Event;
pub use iterate::{Iteration, iterate};
pub use solution::{Solution, Status};

use gmix_core::{MixtureState, Observer, PointSet};

/// Runs EM for the configured number of iterations.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state (iteration 0,
/// no responsibilities) and after each completed iteration, and may return
/// [`Action::StopEarly`] to end the run with the states computed so far.
///
/// # Errors
///
/// Returns a [`RunError`] if the points and initial state disagree on
/// dimension (iteration 0), or if any iteration fails. The error carries the
/// states of the iterations completed before the failure.
pub fn solve<Obs>(
    points: &PointSet,
    initial: MixtureState,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, RunError>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    Error::check_dims(points, &initial).map_err(|source| RunError {
        iteration: 0,
        completed: Vec::new(),
        source,
    })?;

    let mut history = Vec::with_capacity(config.iterations() + 1);
    history.push(initial.clone());

    let event = Event {
        iteration: 0,
        state: &initial,
        responsibilities: None,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            state: initial,
            history,
            iterations: 0,
        });
    }

    let mut current = initial;

    for iteration in 1..=config.iterations() {
        let Iteration {
            state,
            responsibilities,
        } = match iterate(points, &current, config.zero_density()) {
            Ok(next) => next,
            Err(source) => {
                log::debug!("iteration {iteration} failed: {source}");
                return Err(RunError {
                    iteration,
                    completed: history.split_off(1),
                    source,
                });
            }
        };

        if log::log_enabled!(log::Level::Debug)
            && let Ok(shift) = current.max_mean_shift(&state)
        {
            log::debug!("iteration {iteration}: largest mean shift {shift:.6}");
        }

        history.push(state.clone());

        let event = Event {
            iteration,
            state: &state,
            responsibilities: Some(&responsibilities),
        };
        let action = observer.observe(&event);
        current = state;

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                state: current,
                history,
                iterations: iteration,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        state: current,
        history,
        iterations: config.iterations(),
    })
}

/// Runs EM for the configured number of iterations without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns a [`RunError`] under the same conditions as [`solve`].
pub fn solve_unobserved(
    points: &PointSet,
    initial: MixtureState,
    config: &Config,
) -> Result<Solution, RunError> {
    solve(points, initial, config, ())
}
