//! Randomness collaborator: how the initial roster gets shuffled.

use crate::models::Contestant;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shuffles the roster before round 1. Swap in `IdentityShuffler` or a seeded
/// `RandomShuffler` for deterministic brackets.
pub trait Shuffler {
    fn shuffle(&mut self, contestants: &mut [Contestant]);
}

/// Uniform shuffle backed by any `rand` RNG.
#[derive(Clone, Debug)]
pub struct RandomShuffler<R> {
    rng: R,
}

impl<R: Rng> RandomShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomShuffler<ThreadRng> {
    /// Shuffle with the thread-local RNG.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomShuffler<StdRng> {
    /// Reproducible shuffle: the same seed always gives the same bracket.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle(&mut self, contestants: &mut [Contestant]) {
        contestants.shuffle(&mut self.rng);
    }
}

/// Keeps the roster in the order given.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&mut self, _contestants: &mut [Contestant]) {}
}
