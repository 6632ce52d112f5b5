use ndarray::{Array1, Array2};
use thiserror::Error;

use crate::DimensionError;

/// Relative tolerance used when checking covariance symmetry.
const SYMMETRY_TOL: f64 = 1e-9;

/// The mean vector and covariance matrix of one Gaussian cluster.
///
/// The covariance is D×D for a mean of length D, symmetric, and has a
/// non-negative diagonal. Positive definiteness is not checked here; the
/// density evaluation rejects matrices it cannot factor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParameters")
)]
pub struct ClusterParameters {
    mean: Array1<f64>,
    covariance: Array2<f64>,
}

/// Errors that can occur when constructing [`ClusterParameters`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("covariance is not symmetric at ({row}, {col})")]
    NotSymmetric { row: usize, col: usize },

    #[error("covariance diagonal entry {index} is negative: {value}")]
    NegativeVariance { index: usize, value: f64 },
}

impl ClusterParameters {
    /// Creates cluster parameters from a mean and covariance.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Dimension`] if the mean is empty or the
    /// covariance is not D×D, [`ParameterError::NotSymmetric`] if the
    /// covariance is asymmetric, and [`ParameterError::NegativeVariance`] if a
    /// diagonal entry is negative.
    pub fn new(mean: Array1<f64>, covariance: Array2<f64>) -> Result<Self, ParameterError> {
        let dim = mean.len();
        if dim == 0 {
            return Err(DimensionError::Empty("mean").into());
        }
        DimensionError::check("covariance rows", dim, covariance.nrows())?;
        DimensionError::check("covariance columns", dim, covariance.ncols())?;

        for row in 0..dim {
            let value = covariance[[row, row]];
            if value < 0.0 {
                return Err(ParameterError::NegativeVariance { index: row, value });
            }
            for col in 0..row {
                let (a, b) = (covariance[[row, col]], covariance[[col, row]]);
                let scale = a.abs().max(b.abs()).max(1.0);
                if (a - b).abs() > SYMMETRY_TOL * scale {
                    return Err(ParameterError::NotSymmetric { row, col });
                }
            }
        }

        Ok(Self { mean, covariance })
    }

    /// Creates parameters with a diagonal covariance built from `variances`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`ClusterParameters::new`].
    pub fn diagonal(mean: Array1<f64>, variances: &[f64]) -> Result<Self, ParameterError> {
        let covariance = Array2::from_diag(&Array1::from(variances.to_vec()));
        Self::new(mean, covariance)
    }

    /// Returns the mean vector.
    #[must_use]
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Returns the covariance matrix.
    #[must_use]
    pub fn covariance(&self) -> &Array2<f64> {
        &self.covariance
    }

    /// Returns the dimension D.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParameters {
    mean: Array1<f64>,
    covariance: Array2<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParameters> for ClusterParameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(raw.mean, raw.covariance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn accepts_symmetric_covariance() {
        let params = ClusterParameters::new(array![1.0, 2.0], array![[2.0, 0.5], [0.5, 1.0]])
            .expect("valid parameters");

        assert_eq!(params.dim(), 2);
        assert_eq!(params.mean(), &array![1.0, 2.0]);
    }

    #[test]
    fn diagonal_builds_diagonal_covariance() {
        let params = ClusterParameters::diagonal(array![0.0, 0.0], &[5.0, 10.0]).unwrap();

        assert_eq!(params.covariance(), &array![[5.0, 0.0], [0.0, 10.0]]);
    }

    #[test]
    fn rejects_non_square_covariance() {
        let err = ClusterParameters::new(array![1.0, 2.0], array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
            .unwrap_err();

        assert_eq!(
            err,
            ParameterError::Dimension(DimensionError::Mismatch {
                what: "covariance columns",
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn rejects_asymmetric_covariance() {
        let err =
            ClusterParameters::new(array![0.0, 0.0], array![[1.0, 0.3], [0.2, 1.0]]).unwrap_err();

        assert_eq!(err, ParameterError::NotSymmetric { row: 1, col: 0 });
    }

    #[test]
    fn rejects_negative_variance() {
        let err = ClusterParameters::diagonal(array![0.0, 0.0], &[1.0, -2.0]).unwrap_err();

        assert_eq!(
            err,
            ParameterError::NegativeVariance {
                index: 1,
                value: -2.0,
            }
        );
    }

    #[test]
    fn rejects_empty_mean() {
        let err = ClusterParameters::new(Array1::zeros(0), Array2::zeros((0, 0))).unwrap_err();

        assert_eq!(err, ParameterError::Dimension(DimensionError::Empty("mean")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let params = ClusterParameters::diagonal(array![1.0, 1.0], &[9.0, 2.0]).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        let back: ClusterParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);

        let bad = json.replace("9.0", "-9.0");
        assert!(serde_json::from_str::<ClusterParameters>(&bad).is_err());
    }
}
