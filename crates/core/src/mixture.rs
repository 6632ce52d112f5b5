use crate::{ClusterParameters, DimensionError};

/// The current estimate of all K clusters.
///
/// Cluster identity is the index: cluster `k` in one state corresponds to
/// cluster `k` in every state derived from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<ClusterParameters>", into = "Vec<ClusterParameters>")
)]
pub struct MixtureState {
    clusters: Vec<ClusterParameters>,
}

impl MixtureState {
    /// Creates a mixture state from one parameter set per cluster.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Empty`] if `clusters` is empty and
    /// [`DimensionError::Mismatch`] if the clusters disagree on dimension.
    pub fn new(clusters: Vec<ClusterParameters>) -> Result<Self, DimensionError> {
        let first = clusters.first().ok_or(DimensionError::Empty("mixture"))?;
        let dim = first.dim();
        for cluster in &clusters {
            DimensionError::check("cluster dimension", dim, cluster.dim())?;
        }
        Ok(Self { clusters })
    }

    /// Returns the number of clusters (K).
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Always `false`; construction rejects empty mixtures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the shared dimension D.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.clusters[0].dim()
    }

    /// Returns all clusters in index order.
    #[must_use]
    pub fn clusters(&self) -> &[ClusterParameters] {
        &self.clusters
    }

    /// Returns cluster `k`, or `None` if out of range.
    #[must_use]
    pub fn cluster(&self, k: usize) -> Option<&ClusterParameters> {
        self.clusters.get(k)
    }

    /// Iterates over clusters in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClusterParameters> {
        self.clusters.iter()
    }

    /// Returns the largest Euclidean distance between corresponding means.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`] if the states differ in K or D.
    pub fn max_mean_shift(&self, other: &Self) -> Result<f64, DimensionError> {
        DimensionError::check("cluster count", self.len(), other.len())?;
        DimensionError::check("cluster dimension", self.dim(), other.dim())?;

        let shift = self
            .clusters
            .iter()
            .zip(&other.clusters)
            .map(|(a, b)| {
                (a.mean() - b.mean())
                    .iter()
                    .map(|d| d * d)
                    .sum::<f64>()
                    .sqrt()
            })
            .fold(0.0, f64::max);

        Ok(shift)
    }

    /// Consumes the state and returns its clusters.
    #[must_use]
    pub fn into_clusters(self) -> Vec<ClusterParameters> {
        self.clusters
    }
}

impl TryFrom<Vec<ClusterParameters>> for MixtureState {
    type Error = DimensionError;

    fn try_from(clusters: Vec<ClusterParameters>) -> Result<Self, Self::Error> {
        Self::new(clusters)
    }
}

impl From<MixtureState> for Vec<ClusterParameters> {
    fn from(state: MixtureState) -> Self {
        state.clusters
    }
}

impl<'a> IntoIterator for &'a MixtureState {
    type Item = &'a ClusterParameters;
    type IntoIter = std::slice::Iter<'a, ClusterParameters>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
