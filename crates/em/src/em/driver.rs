use gmix_core::{MixtureState, PointSet, ResponsibilityMatrix};

use crate::responsibility::ZeroDensityPolicy;

use super::{Error, Iteration, RunError, iterate};

/// Stateful EM driver over a fixed point set.
///
/// `Em` owns the points and the current mixture state. Each [`step`] runs
/// one E/M cycle and commits the result only if the whole cycle succeeds;
/// on failure the previous state remains current.
///
/// [`step`]: Em::step
#[derive(Debug, Clone)]
pub struct Em {
    points: PointSet,
    state: MixtureState,
    policy: ZeroDensityPolicy,
    iterations: usize,
}

impl Em {
    /// Creates a driver ready to step from `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the points and the initial state
    /// disagree on dimension.
    pub fn new(points: PointSet, initial: MixtureState) -> Result<Self, Error> {
        Error::check_dims(&points, &initial)?;
        Ok(Self {
            points,
            state: initial,
            policy: ZeroDensityPolicy::default(),
            iterations: 0,
        })
    }

    /// Sets the policy for points with zero total density.
    #[must_use]
    pub fn with_policy(mut self, policy: ZeroDensityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the point set.
    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Returns the current mixture state.
    #[must_use]
    pub fn state(&self) -> &MixtureState {
        &self.state
    }

    /// Returns the number of steps committed so far.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs one E/M cycle and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns the error from [`iterate()`]; the current state is unchanged.
    pub fn step(&mut self) -> Result<MixtureState, Error> {
        self.advance()?;
        Ok(self.state.clone())
    }

    /// Runs one E/M cycle and returns the responsibilities it used.
    ///
    /// # Errors
    ///
    /// Returns the error from [`iterate()`]; the current state is unchanged.
    pub fn advance(&mut self) -> Result<ResponsibilityMatrix, Error> {
        let Iteration {
            state,
            responsibilities,
        } = iterate(&self.points, &self.state, self.policy)?;

        self.state = state;
        self.iterations += 1;
        log::trace!("committed iteration {}", self.iterations);

        Ok(responsibilities)
    }

    /// Runs `iterations` steps and returns the state after each one.
    ///
    /// # Errors
    ///
    /// Returns a [`RunError`] at the first failing step. Steps completed
    /// before the failure stay committed, so [`Em::state`] reflects the last
    /// successful step, and their states are returned in
    /// [`RunError::completed`].
    pub fn run(&mut self, iterations: usize) -> Result<Vec<MixtureState>, RunError> {
        let mut completed = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            match self.step() {
                Ok(state) => completed.push(state),
                Err(source) => {
                    return Err(RunError {
                        iteration: completed.len() + 1,
                        completed,
                        source,
                    });
                }
            }
        }
        Ok(completed)
    }

    /// Consumes the driver and returns the current state.
    #[must_use]
    pub fn into_state(self) -> MixtureState {
        self.state
    }
}
