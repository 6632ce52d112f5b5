//! Core types for Gaussian mixture estimation.
//!
//! This crate defines the data model shared by the EM engine and the
//! observers that watch it:
//!
//! - [`PointSet`] — an immutable N×D matrix of sample points
//! - [`ClusterParameters`] — one cluster's mean vector and covariance matrix
//! - [`MixtureState`] — the K cluster estimates, indexed consistently
//! - [`ResponsibilityMatrix`] — the N×K point-to-cluster membership weights
//! - [`Observer`] — receives driver events and optionally returns control actions
//!
//! Every constructor checks shapes eagerly and reports a [`DimensionError`]
//! instead of broadcasting, truncating, or padding.

mod cluster;
mod error;
mod mixture;
mod observer;
mod points;
mod responsibility;

pub use cluster::{ClusterParameters, ParameterError};
pub use error::DimensionError;
pub use mixture::MixtureState;
pub use observer::Observer;
pub use points::{PointSet, PointSetError};
pub use responsibility::{ResponsibilityMatrix, WeightsError};
