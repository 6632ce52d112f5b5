use gmix_core::Observer;
use log::Level;

use crate::traits::HasState;

/// Logs every observed state's cluster means and covariances.
///
/// Never requests an action.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    level: Level,
}

impl LogReporter {
    /// Creates a reporter that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level reports are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl<E: HasState, A> Observer<E, A> for LogReporter {
    fn observe(&mut self, event: &E) -> Option<A> {
        if !log::log_enabled!(self.level) {
            return None;
        }

        log::log!(self.level, "iteration {}", event.iteration());
        for (k, params) in event.state().iter().enumerate() {
            log::log!(
                self.level,
                "cluster {k}: mean {:.3}, covariance {:.3}",
                params.mean(),
                params.covariance()
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gmix_core::{ClusterParameters, MixtureState, PointSet};
    use gmix_em::em::{self, Action, Config, Status};
    use ndarray::array;

    #[test]
    fn reporting_does_not_alter_the_run() {
        let points = PointSet::from_rows(&[
            [0.0, 0.1],
            [0.4, -0.2],
            [-0.3, -0.1],
            [5.0, 5.2],
            [5.3, 4.8],
            [4.7, 4.9],
        ])
        .unwrap();
        let initial = MixtureState::new(vec![
            ClusterParameters::diagonal(array![0.0, 0.0], &[1.0, 1.0]).unwrap(),
            ClusterParameters::diagonal(array![5.0, 5.0], &[1.0, 1.0]).unwrap(),
        ])
        .unwrap();

        let reported =
            em::solve(&points, initial.clone(), &Config::new(4), LogReporter::default()).unwrap();
        let silent = em::solve_unobserved(&points, initial, &Config::new(4)).unwrap();

        assert_eq!(reported.status, Status::Complete);
        assert_eq!(reported.history, silent.history);
    }

    #[test]
    fn never_returns_an_action() {
        let state = MixtureState::new(vec![
            ClusterParameters::diagonal(array![0.0], &[1.0]).unwrap(),
        ])
        .unwrap();
        let mut reporter = LogReporter::new(Level::Warn);

        let action: Option<Action> = reporter.observe(&em::Event {
            iteration: 0,
            state: &state,
            responsibilities: None,
        });

        assert_eq!(action, None);
    }
}
