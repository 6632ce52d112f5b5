use rand::Rng;
use rand_distr::{Distribution, Normal};

/// True parameters of one generating cluster with diagonal covariance.
pub struct Blob {
    pub mean: [f64; 2],
    pub variances: [f64; 2],
}

pub const RED: Blob = Blob {
    mean: [5.0, 3.0],
    variances: [5.0, 10.0],
};

pub const BLUE: Blob = Blob {
    mean: [18.0, 10.0],
    variances: [10.0, 8.0],
};

impl Blob {
    /// Draws `n` points from this blob using the caller's generator.
    pub fn sample<R: Rng>(&self, rng: &mut R, n: usize) -> Vec<[f64; 2]> {
        let x = Normal::new(self.mean[0], self.variances[0].sqrt()).expect("valid std dev");
        let y = Normal::new(self.mean[1], self.variances[1].sqrt()).expect("valid std dev");
        (0..n).map(|_| [x.sample(rng), y.sample(rng)]).collect()
    }
}

/// Red samples followed by blue samples.
pub fn red_and_blue<R: Rng>(rng: &mut R, per_blob: usize) -> Vec<[f64; 2]> {
    let mut rows = RED.sample(rng, per_blob);
    rows.extend(BLUE.sample(rng, per_blob));
    rows
}

pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
