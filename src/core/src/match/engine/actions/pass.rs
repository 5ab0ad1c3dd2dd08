use crate::club::{Player, Skill};
use crate::r#match::engine::actions::{ActionResolver, MAX_SPEED};
use crate::r#match::engine::ball::{BallPhase, RallyState};
use crate::utils::RandomSource;

const PASS_NOISE: f32 = 0.4;

impl ActionResolver {
    /// Receives the incoming serve, spike or freeball; records a 0-3 quality tier.
    pub fn pass(receiver: &Player, mut ball: RallyState, rng: &mut dyn RandomSource) -> RallyState {
        let incoming = (ball.speed as f32 / MAX_SPEED).clamp(0.0, 1.0);
        let passing = (receiver.effective(Skill::Passing) / 100.0).clamp(0.0, 1.0);

        let score = passing - incoming + (rng.next_f32() - 0.5) * PASS_NOISE;
        let quality = Self::pass_quality(score);

        ball.touch(receiver.id, BallPhase::Pass, quality, quality > 0);

        ball
    }

    fn pass_quality(score: f32) -> u32 {
        match score {
            s if s < -0.2 => 0,
            s if s < 0.1 => 1,
            s if s < 0.3 => 2,
            _ => 3,
        }
    }
}
