//! Ambient capabilities: wall clock and randomness.
//!
//! Handlers never read the system clock or the thread RNG directly; they go
//! through these traits so tests can substitute fixed values.

use chrono::{DateTime, Utc};
use rand::Rng;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait Randomness: Send + Sync {
    /// Uniform integer in the inclusive range `[min, max]`.
    fn in_range(&self, min: u32, max: u32) -> u32;

    /// Uniform index in `[0, upper)`. `upper` must be non-zero.
    fn pick(&self, upper: usize) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomness;

impl Randomness for ThreadRandomness {
    fn in_range(&self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }

    fn pick(&self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}
