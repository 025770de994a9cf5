use crate::domain::ports::Randomizer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Production randomness over the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomizer;

impl Randomizer for ThreadRandomizer {
    fn one_in(&self, odds: u32) -> bool {
        match odds {
            0 => false,
            n => rand::thread_rng().gen_range(0..n) == 0,
        }
    }
}

/// Reproducible randomness from a fixed seed. Same seed, same run.
#[derive(Debug)]
pub struct SeededRandomizer {
    rng: Mutex<StdRng>,
}

impl SeededRandomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Randomizer for SeededRandomizer {
    fn one_in(&self, odds: u32) -> bool {
        match odds {
            0 => false,
            n => {
                let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                rng.gen_range(0..n) == 0
            }
        }
    }
}

/// A source on which the rare event never occurs; every gate passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRareEvents;

impl Randomizer for NoRareEvents {
    fn one_in(&self, _odds: u32) -> bool {
        false
    }
}

/// Replays a fixed script of decisions, then answers `false` forever.
/// Tracks how many decisions were handed out.
#[derive(Debug)]
pub struct ScriptedRandomizer {
    script: Mutex<VecDeque<bool>>,
    consumed: AtomicUsize,
}

impl ScriptedRandomizer {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            consumed: AtomicUsize::new(0),
        }
    }

    /// Number of decisions consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed.load(Ordering::Relaxed)
    }
}

impl Randomizer for ScriptedRandomizer {
    fn one_in(&self, _odds: u32) -> bool {
        self.consumed.fetch_add(1, Ordering::Relaxed);
        let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        script.pop_front().unwrap_or(false)
    }
}
