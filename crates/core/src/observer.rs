/// Receives driver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a run without changing its API,
/// enabling logging, snapshot capture, or convergence-based stopping.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// driver-specific action and `None` lets the run continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<Obs: Observer<usize, Action>>(mut observer: Obs, events: usize) -> usize {
        for event in 0..events {
            if observer.observe(&event) == Some(Action::Stop) {
                return event;
            }
        }
        events
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 5), 5);
    }

    #[test]
    fn closure_observer_can_stop() {
        let stopped_at = drive(|event: &usize| (*event == 3).then_some(Action::Stop), 10);
        assert_eq!(stopped_at, 3);
    }
}
