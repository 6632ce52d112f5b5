use gmix_core::{MixtureState, ResponsibilityMatrix};

/// Event emitted by the EM driver for each state.
///
/// Iteration 0 is the initial state, before any E/M cycle.
/// Iterations 1..N are emitted after each completed cycle.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The iteration number (0 for the initial state).
    pub iteration: usize,

    /// The mixture state after this iteration.
    pub state: &'a MixtureState,

    /// The responsibilities that produced `state`; `None` for iteration 0.
    pub responsibilities: Option<&'a ResponsibilityMatrix>,
}
