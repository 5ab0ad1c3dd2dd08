use crate::club::{Player, Skill};
use crate::r#match::engine::actions::ActionResolver;
use crate::r#match::engine::ball::{BallPhase, RallyState};
use crate::utils::RandomSource;

/// Even a perfectly consistent server faults this often.
pub const SERVE_FAULT_FLOOR: f32 = 0.1;

impl ActionResolver {
    pub fn serve(server: &Player, mut ball: RallyState, rng: &mut dyn RandomSource) -> RallyState {
        let consistency = server.effective(Skill::Consistency);
        let fault_chance = (1.0 - consistency / 100.0).max(SERVE_FAULT_FLOOR);

        if rng.next_f32() < fault_chance {
            ball.touch(server.id, BallPhase::Serve, 0, false);
            return ball;
        }

        let speed = Self::hit_speed(server.effective(Skill::Power), rng);
        ball.touch(server.id, BallPhase::Serve, Self::round_speed(speed), true);

        ball
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerPosition;
    use crate::testing::player_with;
    use crate::utils::{ScriptedRandom, SimulationRng};

    fn server(power: f32, consistency: f32) -> Player {
        let mut player = player_with(1, PlayerPosition::Hitter, 50.0);
        player.skills.power = power;
        player.skills.consistency = consistency;
        player
    }

    #[test]
    fn test_fault_is_dead_serve() {
        let mut rng = ScriptedRandom::new(vec![0.05]);
        let ball = ActionResolver::serve(&server(50.0, 100.0), RallyState::new(1), &mut rng);

        assert!(ball.is_dead());
        assert_eq!(ball.speed, 0);
        assert_eq!(ball.phase, BallPhase::Serve);
        assert_eq!(ball.touches(), 1);
    }

    #[test]
    fn test_successful_serve_speed() {
        let mut rng = ScriptedRandom::new(vec![0.5, 0.5]);
        let ball = ActionResolver::serve(&server(50.0, 100.0), RallyState::new(1), &mut rng);

        assert!(ball.in_play);
        // 50 / 100 * 80 + 0.5 * 5 = 42.5
        assert_eq!(ball.speed, 43);
        assert_eq!(ball.player_id, 1);
    }

    #[test]
    fn test_low_consistency_faults_more() {
        // fault chance 0.6
        let mut rng = ScriptedRandom::new(vec![0.55]);
        let ball = ActionResolver::serve(&server(50.0, 40.0), RallyState::new(1), &mut rng);

        assert!(ball.is_dead());
    }

    #[test]
    fn test_serve_statistics_over_many_attempts() {
        let player = server(50.0, 100.0);
        let mut rng = SimulationRng::seeded(2025);

        let mut faults = 0;
        let mut speeds = Vec::new();

        for _ in 0..1000 {
            let ball = ActionResolver::serve(&player, RallyState::new(1), &mut rng);
            if ball.in_play {
                speeds.push(ball.speed as f32);
            } else {
                faults += 1;
            }
        }

        let fault_rate = faults as f32 / 1000.0;
        let mean_speed = speeds.iter().sum::<f32>() / speeds.len() as f32;

        assert!((0.07..=0.13).contains(&fault_rate), "fault rate {}", fault_rate);
        assert!((41.8..=43.2).contains(&mean_speed), "mean speed {}", mean_speed);
    }
}
