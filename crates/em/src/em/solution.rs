use gmix_core::MixtureState;

/// Indicates how the run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested iterations.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an EM run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// The final mixture state.
    pub state: MixtureState,

    /// State after each iteration, starting with the initial state.
    pub history: Vec<MixtureState>,

    /// Number of iterations completed.
    pub iterations: usize,
}
