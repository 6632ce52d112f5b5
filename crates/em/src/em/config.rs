use crate::responsibility::ZeroDensityPolicy;

/// Configuration for an EM run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    iterations: usize,
    zero_density: ZeroDensityPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Config {
    /// Creates a config that runs exactly `iterations` E/M cycles.
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            zero_density: ZeroDensityPolicy::default(),
        }
    }

    /// Sets the policy for points with zero total density.
    #[must_use]
    pub fn with_zero_density(mut self, policy: ZeroDensityPolicy) -> Self {
        self.zero_density = policy;
        self
    }

    /// Returns the number of iterations to run.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the zero-total-density policy.
    #[must_use]
    pub fn zero_density(&self) -> ZeroDensityPolicy {
        self.zero_density
    }
}
