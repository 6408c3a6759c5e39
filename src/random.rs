//! Random source used for tile spawning.

use alloc::vec::Vec;
use rand::{Rng, RngCore};

/// Uniform integer draws for the engine. Every `rand` RNG is one; tests can
/// substitute [`ScriptedSource`] for an exact sequence.
pub trait RandomSource {
    /// Uniform draw in `[0, bound)`. `bound` is always at least 1.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted. Each value is
/// reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    pos: usize,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            pos: 0,
            draws: 0,
        }
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: usize) -> usize {
        self.draws += 1;
        if self.script.is_empty() {
            return 0;
        }
        let v = self.script[self.pos % self.script.len()];
        self.pos += 1;
        v % bound.max(1)
    }
}
