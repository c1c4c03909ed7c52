//! Score perturbation — biased random offset applied to the displayed overall score only.
//!
//! delta = u × 26 − 18 for u uniform in [0, 1), so the offset spans [−18, +8) with a mean of −5.
//! Category scores are never perturbed.
//!
//! The uniform source sits behind a trait so the scorer and the randomness can be
//! tested separately. `AppState` carries an `Arc<dyn UniformSource>`.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SPAN: f64 = 26.0;
const MAX_DROP: f64 = 18.0;

/// Supplies uniform samples in [0, 1).
pub trait UniformSource: Send + Sync {
    fn sample(&self) -> f64;
}

/// Thread-local RNG. Default in production.
pub struct ThreadRngSource;

impl UniformSource for ThreadRngSource {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible sequence from a fixed seed.
pub struct SeededSource(Mutex<StdRng>);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl UniformSource for SeededSource {
    fn sample(&self) -> f64 {
        match self.0.lock() {
            Ok(mut rng) => rng.gen::<f64>(),
            Err(poisoned) => poisoned.into_inner().gen::<f64>(),
        }
    }
}

/// Always returns the same sample, clamped into [0, 1).
#[cfg(test)]
pub struct FixedSource(pub f64);

#[cfg(test)]
impl UniformSource for FixedSource {
    fn sample(&self) -> f64 {
        self.0.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Applies the offset and clamps to 0–100.
pub fn perturb(base_score: u32, source: &dyn UniformSource) -> u32 {
    let delta = source.sample() * SPAN - MAX_DROP;
    (base_score as f64 + delta).round().clamp(0.0, 100.0) as u32
}
