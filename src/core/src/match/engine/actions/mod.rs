//! Stochastic touch resolvers.
//!
//! Each resolver takes the rally by value, records exactly one touch for the acting
//! player and hands the rally back. Misses are ordinary outcomes: the touch is recorded
//! with `in_play = false` and the rally owner stops the loop.

pub mod pass;
pub mod serve;
pub mod set;
pub mod spike;

use crate::utils::RandomSource;

/// Fastest ball a full-power player can produce, before noise.
pub const MAX_SPEED: f32 = 80.0;

/// Speed of an easy return over the net.
pub const FREEBALL_SPEED: u32 = 10;

const SPEED_NOISE: f32 = 5.0;

pub struct ActionResolver;

impl ActionResolver {
    /// Shared serve/spike speed: power term plus uniform noise in `[0, 5)`.
    fn hit_speed(power: f32, rng: &mut dyn RandomSource) -> f32 {
        power / 100.0 * MAX_SPEED + rng.next_f32() * SPEED_NOISE
    }

    fn round_speed(speed: f32) -> u32 {
        speed.round().max(0.0) as u32
    }
}
