use crate::r#match::FixtureId;
use crate::r#match::engine::ball::BallTouch;
use crate::stats::PlayerStats;
use std::collections::HashMap;

/// Final points of one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScore {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_points: u32,
    pub away_points: u32,
}

impl SetScore {
    pub fn new(home_team_id: u32, away_team_id: u32) -> Self {
        SetScore {
            home_team_id,
            away_team_id,
            home_points: 0,
            away_points: 0,
        }
    }

    pub fn award(&mut self, team_id: u32) {
        if team_id == self.home_team_id {
            self.home_points += 1;
        } else if team_id == self.away_team_id {
            self.away_points += 1;
        }
    }

    pub fn points_for(&self, team_id: u32) -> Option<u32> {
        match team_id {
            id if id == self.home_team_id => Some(self.home_points),
            id if id == self.away_team_id => Some(self.away_points),
            _ => None,
        }
    }

    /// A set ends once one side has at least `points_to_win` and leads by `margin`.
    pub fn is_finished(&self, points_to_win: u32, margin: u32) -> bool {
        let leader = self.home_points.max(self.away_points);
        let trailer = self.home_points.min(self.away_points);

        leader >= points_to_win && leader - trailer >= margin
    }

    pub fn winner(&self) -> Option<u32> {
        match self.home_points.cmp(&self.away_points) {
            std::cmp::Ordering::Greater => Some(self.home_team_id),
            std::cmp::Ordering::Less => Some(self.away_team_id),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Everything harvested from one played fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStats {
    pub game_id: FixtureId,
    pub player_stats: HashMap<u32, PlayerStats>,
    pub set_scores: Vec<SetScore>,
    pub winning_team_id: Option<u32>,
    pub losing_team_id: Option<u32>,
}

impl GameStats {
    pub fn new(game_id: FixtureId) -> Self {
        GameStats {
            game_id,
            player_stats: HashMap::new(),
            set_scores: Vec::new(),
            winning_team_id: None,
            losing_team_id: None,
        }
    }

    /// Commits one rally's touch history to the per-player counters.
    pub fn record_rally(&mut self, history: &[BallTouch]) {
        for (index, touch) in history.iter().enumerate() {
            self.player_stats
                .entry(touch.player_id)
                .or_insert_with(|| PlayerStats::new(touch.player_id))
                .record(touch, history.get(index + 1));
        }
    }

    pub fn is_complete(&self) -> bool {
        self.winning_team_id.is_some() && self.losing_team_id.is_some()
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.game_id.home_team_id == team_id || self.game_id.away_team_id == team_id
    }

    /// Number of sets `team_id` took in this game.
    pub fn sets_won(&self, team_id: u32) -> usize {
        self.set_scores
            .iter()
            .filter(|score| score.winner() == Some(team_id))
            .count()
    }
}
