//! Sampling helpers shared by the synthesizers.
//!
//! Every helper takes the RNG explicitly so callers can inject a seeded
//! generator.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Closed `[min, max]` band a synthetic metric is clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

/// Normal sample with the given mean and standard deviation.
pub fn gauss<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + z * std
}

/// `base + U[0,1) * span`.
pub fn offset_uniform<R: Rng + ?Sized>(rng: &mut R, base: f64, span: f64) -> f64 {
    base + rng.gen::<f64>() * span
}

/// Round to `digits` decimals. Exact halves go to the even neighbour, so
/// `90.625` becomes `90.62`.
pub fn round_to(v: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (v * p).round_ties_even() / p
}
