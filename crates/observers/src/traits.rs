//! Capability traits for driver-agnostic observers.
//!
//! These traits abstract over driver-specific event and action types, so an
//! observer written against them works with any driver that implements them.
//!
//! # Example
//!
//! ```rust
//! use gmix_core::Observer;
//! use gmix_observers::traits::{CanStopEarly, HasState};
//!
//! struct AtMost(usize);
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for AtMost {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iteration() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use gmix_core::{MixtureState, ResponsibilityMatrix};
use gmix_em::em;

/// An event that carries a mixture state.
pub trait HasState {
    /// Returns the iteration number (0 for the initial state).
    fn iteration(&self) -> usize;

    /// Returns the mixture state at this iteration.
    fn state(&self) -> &MixtureState;

    /// Returns the responsibilities that produced the state, if any.
    fn responsibilities(&self) -> Option<&ResponsibilityMatrix> {
        None
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the driver early.
    fn stop_early() -> Self;
}

impl HasState for em::Event<'_> {
    fn iteration(&self) -> usize {
        self.iteration
    }

    fn state(&self) -> &MixtureState {
        self.state
    }

    fn responsibilities(&self) -> Option<&ResponsibilityMatrix> {
        self.responsibilities
    }
}

impl CanStopEarly for em::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use gmix_core::{ClusterParameters, Observer, PointSet};
    use gmix_em::em::Config;
    use ndarray::array;

    /// Checks responsibilities through the capability trait alone.
    #[derive(Default)]
    struct RowSums {
        points: usize,
        with: Vec<usize>,
        without: Vec<usize>,
    }

    impl<E: HasState, A> Observer<E, A> for &mut RowSums {
        fn observe(&mut self, event: &E) -> Option<A> {
            match event.responsibilities() {
                Some(weights) => {
                    assert_eq!(weights.points(), self.points);
                    assert_eq!(weights.clusters(), event.state().len());
                    for i in 0..weights.points() {
                        assert_relative_eq!(weights.row(i).sum(), 1.0, epsilon = 1e-9);
                    }
                    self.with.push(event.iteration());
                }
                None => self.without.push(event.iteration()),
            }
            None
        }
    }

    #[test]
    fn responsibilities_reach_generic_observers() {
        let points =
            PointSet::from_rows(&[[0.1, 0.2], [-0.3, 0.1], [0.2, -0.4], [5.1, 4.8], [4.7, 5.3]])
                .unwrap();
        let initial = MixtureState::new(vec![
            ClusterParameters::diagonal(array![0.5, 0.5], &[1.0, 1.0]).unwrap(),
            ClusterParameters::diagonal(array![4.5, 4.5], &[1.0, 1.0]).unwrap(),
        ])
        .unwrap();
        let mut obs = RowSums {
            points: points.len(),
            ..RowSums::default()
        };

        em::solve(&points, initial, &Config::new(3), &mut obs).unwrap();

        assert_eq!(obs.without, vec![0]);
        assert_eq!(obs.with, vec![1, 2, 3]);
    }
}
