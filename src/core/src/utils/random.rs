use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of every random draw made by the engine.
///
/// Resolvers, the rally loop and the scheduler never reach for a global generator;
/// they take a `RandomSource` so a run can be replayed from a seed.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform integer in `[low, high]`, both ends inclusive.
    fn next_int(&mut self, low: i32, high: i32) -> i32;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Seed for a child generator (one per parallel match).
    fn next_seed(&mut self) -> u64;
}

#[derive(Debug, Clone)]
pub struct SimulationRng {
    inner: ChaCha8Rng,
}

impl SimulationRng {
    pub fn seeded(seed: u64) -> Self {
        SimulationRng {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        SimulationRng {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for SimulationRng {
    fn next_f32(&mut self) -> f32 {
        self.inner.gen_range(0.0f32..1.0)
    }

    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.inner.gen_range(low..=high)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn next_seed(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// Replays a fixed list of `[0, 1)` draws, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: Vec<f32>,
    position: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty());
        ScriptedRandom { values, position: 0 }
    }

    fn draw(&mut self) -> f32 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        self.draw()
    }

    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        let span = (high - low + 1) as f32;
        (low + (self.draw() * span).floor() as i32).min(high)
    }

    fn next_index(&mut self, len: usize) -> usize {
        ((self.draw() * len as f32).floor() as usize).min(len - 1)
    }

    fn next_seed(&mut self) -> u64 {
        (self.draw() as f64 * u32::MAX as f64) as u64
    }
}
