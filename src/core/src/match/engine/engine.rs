use crate::club::{Player, Skill};
use crate::r#match::MatchTeam;
use crate::r#match::engine::actions::ActionResolver;
use crate::r#match::engine::ball::{BallTouch, RallyState};
use crate::utils::RandomSource;
use log::{trace, warn};
use std::cmp::Ordering;

/// Rallies longer than this are declared dead on the last touch.
pub const MAX_RALLY_TOUCHES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourtSide {
    Home,
    Away,
}

impl CourtSide {
    pub fn opposite(self) -> Self {
        match self {
            CourtSide::Home => CourtSide::Away,
            CourtSide::Away => CourtSide::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RallyOutcome {
    pub winner: CourtSide,
    pub history: Vec<BallTouch>,
}

pub struct RallyEngine;

impl RallyEngine {
    /// Plays one rally from the serve of `serving` until the ball dies.
    /// The point goes to the side that did not make the last touch.
    pub fn play(
        serving: CourtSide,
        home: &MatchTeam,
        away: &MatchTeam,
        rng: &mut dyn RandomSource,
    ) -> RallyOutcome {
        let team = |side: CourtSide| match side {
            CourtSide::Home => home,
            CourtSide::Away => away,
        };

        let Some(server) = team(serving).server() else {
            warn!("{} has nobody in the serving slot", team(serving).team_name);
            return RallyOutcome {
                winner: serving.opposite(),
                history: Vec::new(),
            };
        };

        let mut ball = ActionResolver::serve(server, RallyState::new(server.id), rng);
        let mut last_side = serving;

        while ball.in_play {
            if ball.touches() >= MAX_RALLY_TOUCHES {
                warn!(
                    "rally stopped after {} touches ({} vs {})",
                    ball.touches(),
                    home.team_name,
                    away.team_name
                );
                ball.kill();
                break;
            }

            last_side = last_side.opposite();
            ball = Self::possession(team(last_side), ball, rng);
        }

        let winner = last_side.opposite();

        trace!(
            "rally: {} touches, point to {}",
            ball.touches(),
            team(winner).team_name
        );

        RallyOutcome {
            winner,
            history: ball.into_history(),
        }
    }

    /// One side's pass, set and attack. Stops early when a touch kills the ball.
    fn possession(team: &MatchTeam, ball: RallyState, rng: &mut dyn RandomSource) -> RallyState {
        let Some(receiver) = Self::pick(&team.back_row(), rng) else {
            return Self::concede(team, ball);
        };

        let ball = ActionResolver::pass(receiver, ball, rng);
        if ball.is_dead() {
            return ball;
        }

        let teammates: Vec<&Player> = team
            .on_court()
            .into_iter()
            .filter(|p| p.id != receiver.id)
            .collect();

        let setter = if ball.speed == 1 {
            Self::pick(&teammates, rng)
        } else {
            Self::best_setter(&teammates)
        };
        let Some(setter) = setter else {
            return Self::concede(team, ball);
        };

        let ball = ActionResolver::set(setter, ball, rng);
        if ball.is_dead() {
            return ball;
        }

        let hitters: Vec<&Player> = team
            .front_row()
            .into_iter()
            .filter(|p| p.id != setter.id)
            .collect();

        let Some(hitter) = Self::pick(&hitters, rng) else {
            return Self::concede(team, ball);
        };

        ActionResolver::spike(hitter, ball, rng)
    }

    fn pick<'p>(candidates: &[&'p Player], rng: &mut dyn RandomSource) -> Option<&'p Player> {
        if candidates.is_empty() {
            return None;
        }

        Some(candidates[rng.next_index(candidates.len())])
    }

    fn best_setter<'p>(candidates: &[&'p Player]) -> Option<&'p Player> {
        candidates.iter().copied().max_by(|a, b| {
            a.effective(Skill::Setting)
                .partial_cmp(&b.effective(Skill::Setting))
                .unwrap_or(Ordering::Equal)
        })
    }

    // Only reachable with a broken court lineup.
    fn concede(team: &MatchTeam, mut ball: RallyState) -> RallyState {
        warn!("{} cannot field a player for the next touch", team.team_name);
        ball.in_play = false;
        ball
    }
}
