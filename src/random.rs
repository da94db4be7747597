//! Process-wide random source shared by every handler.
//!
//! One generator is seeded at startup and then drawn from by concurrent
//! requests. Draws are serialized through a mutex; none of them hold the
//! lock across an await point.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Shared pseudo-random generator. Not cryptographically secure.
#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<StdRng>,
    seed: u64,
}

impl RandomSource {
    /// Seed from the current wall-clock time at nanosecond resolution.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        // Truncation keeps the fast-moving low bits, which is all a seed needs.
        Self::seeded(nanos as u64)
    }

    /// Deterministic source, for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "Random source seeded");
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed,
        }
    }

    /// Seed the source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[1, sides]`. `sides` of zero yields zero.
    pub fn roll(&self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.lock().gen_range(1..=sides)
    }

    /// Uniformly pick one element, `None` for an empty slice.
    pub fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        match items {
            [] => None,
            [only] => Some(only),
            _ => items.choose(&mut *self.lock()),
        }
    }

    /// Uniform in-place permutation.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        if items.len() < 2 {
            return;
        }
        items.shuffle(&mut *self.lock());
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // Generator state stays valid even if a holder panicked.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
