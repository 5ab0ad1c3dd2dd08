use crate::club::{Player, Skill};
use crate::r#match::engine::actions::{ActionResolver, FREEBALL_SPEED};
use crate::r#match::engine::ball::{BallPhase, RallyState, PERFECT_TIER};
use crate::utils::RandomSource;

/// Chance that an attack off a tier 1 set goes straight out.
const POOR_SET_MISS_CHANCE: f32 = 0.2;

const TIER_TWO_SPEED_FACTOR: f32 = 0.9;

impl ActionResolver {
    /// Attacks off the incoming set. A tier 1 set is either missed or sent over as a freeball.
    pub fn spike(hitter: &Player, mut ball: RallyState, rng: &mut dyn RandomSource) -> RallyState {
        let set_quality = ball.speed;

        if set_quality <= 1 {
            if rng.next_f32() < POOR_SET_MISS_CHANCE {
                ball.touch(hitter.id, BallPhase::Spike, 0, false);
            } else {
                ball.touch(hitter.id, BallPhase::Freeball, FREEBALL_SPEED, true);
            }
            return ball;
        }

        let modifier = match set_quality {
            PERFECT_TIER => 1.0,
            2 => 1.2,
            _ => 1.5,
        };
        let miss_chance = (1.0 - hitter.effective(Skill::Consistency) / 100.0) * modifier;

        if rng.next_f32() < miss_chance {
            ball.touch(hitter.id, BallPhase::Spike, 0, false);
            return ball;
        }

        let mut speed = Self::hit_speed(hitter.effective(Skill::Power), rng);
        if set_quality == 2 {
            speed *= TIER_TWO_SPEED_FACTOR;
        }

        ball.touch(hitter.id, BallPhase::Spike, Self::round_speed(speed), true);

        ball
    }
}
