//! Expectation-Maximization for Gaussian mixtures.
//!
//! Each module is one stage of an EM iteration, leaf to root:
//!
//! - [`density`] — multivariate normal density over a whole point set
//! - [`responsibility`] — normalizes per-cluster densities into membership
//!   weights (the E-step)
//! - [`estimate`] — re-estimates one cluster's mean and covariance from its
//!   weights (the M-step)
//! - [`em`] — drives repeated E/M cycles over a fixed iteration budget
//!
//! # Example
//!
//! ```ignore
//! use gmix_em::em;
//!
//! let solution = em::solve_unobserved(&points, initial, &em::Config::default())?;
//!
//! for (i, state) in solution.history.iter().enumerate() {
//!     println!("iteration {i}: {:?}", state.cluster(0));
//! }
//! ```

pub mod density;
pub mod em;
pub mod estimate;
pub mod responsibility;
