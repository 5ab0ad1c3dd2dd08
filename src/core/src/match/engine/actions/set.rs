use crate::club::{Player, Skill};
use crate::r#match::engine::actions::ActionResolver;
use crate::r#match::engine::ball::{BallPhase, RallyState, PERFECT_TIER};
use crate::utils::RandomSource;

const SET_NOISE: i32 = 15;

impl ActionResolver {
    /// Turns the pass tier into a set tier; a tier 0 set kills the rally.
    pub fn set(setter: &Player, mut ball: RallyState, rng: &mut dyn RandomSource) -> RallyState {
        let multiplier = match ball.speed {
            1 => 0.5,
            2 => 0.75,
            3 => 1.0,
            _ => 0.5,
        };

        let raw = multiplier * setter.effective(Skill::Setting)
            + rng.next_int(-SET_NOISE, SET_NOISE) as f32;
        let quality = (raw / 100.0 * 4.0).floor().clamp(0.0, PERFECT_TIER as f32) as u32;

        ball.touch(setter.id, BallPhase::Set, quality, quality > 0);

        ball
    }
}
