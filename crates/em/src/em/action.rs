/// Control actions supported by the EM driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run early and return the states computed so far.
    StopEarly,
}
