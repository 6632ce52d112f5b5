//! Reusable observers for Gaussian mixture EM runs.
//!
//! These observers plug into [`gmix_em::em::solve`] without changing the
//! driver: the core always runs its fixed iteration budget, and anything
//! smarter is layered on here.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for driver-agnostic observers
//!   ([`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`MeanShift`] — stops once cluster means stop moving
//! - [`LogReporter`] — logs each iteration's parameters through `log`
//!
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod mean_shift;
mod reporter;

pub use mean_shift::{MeanShift, MeanShiftError};
pub use reporter::LogReporter;
