use crate::r#match::engine::{CourtSide, RallyEngine};
use crate::r#match::{FixtureId, MatchResult, MatchSettings, MatchTeam};
use crate::stats::{GameStats, SetScore};
use crate::utils::RandomSource;
use log::debug;

/// One fixture being played: two private team views, the running set count and the stats.
pub struct Game {
    pub id: FixtureId,
    home: MatchTeam,
    away: MatchTeam,
    settings: MatchSettings,
    current_set: usize,
    stats: GameStats,
}

impl Game {
    pub fn new(id: FixtureId, home: MatchTeam, away: MatchTeam) -> Self {
        Self::with_settings(id, home, away, MatchSettings::default())
    }

    pub fn with_settings(
        id: FixtureId,
        home: MatchTeam,
        away: MatchTeam,
        settings: MatchSettings,
    ) -> Self {
        Game {
            id,
            home,
            away,
            settings,
            current_set: 0,
            stats: GameStats::new(id),
        }
    }

    pub fn current_set(&self) -> usize {
        self.current_set
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn team(&self, side: CourtSide) -> &MatchTeam {
        match side {
            CourtSide::Home => &self.home,
            CourtSide::Away => &self.away,
        }
    }

    fn team_mut(&mut self, side: CourtSide) -> &mut MatchTeam {
        match side {
            CourtSide::Home => &mut self.home,
            CourtSide::Away => &mut self.away,
        }
    }

    /// Plays one rally, tires both courts and commits the touches to the game stats.
    pub fn play_point(&mut self, serving: CourtSide, rng: &mut dyn RandomSource) -> CourtSide {
        let outcome = RallyEngine::play(serving, &self.home, &self.away, rng);

        self.home.fatigue_on_court();
        self.away.fatigue_on_court();

        self.stats.record_rally(&outcome.history);

        outcome.winner
    }

    pub fn play_set(&mut self, rng: &mut dyn RandomSource) -> SetScore {
        let per_set = self.settings.substitutions_per_set;
        self.home.reset_substitutions(per_set);
        self.away.reset_substitutions(per_set);

        let mut serving = if self.current_set % 2 == 0 {
            CourtSide::Home
        } else {
            CourtSide::Away
        };

        let mut score = SetScore::new(self.home.team_id, self.away.team_id);

        while !score.is_finished(
            self.settings.points_to_win_set,
            self.settings.set_winning_margin,
        ) {
            let winner = self.play_point(serving, rng);
            score.award(self.team(winner).team_id);

            if winner != serving {
                let threshold = self.settings.fatigue_threshold;
                self.team_mut(winner).side_out(threshold);
                serving = winner;
            }
        }

        debug!(
            "{} set {}: {} {} - {} {}",
            self.id,
            self.current_set + 1,
            self.home.team_name,
            score.home_points,
            score.away_points,
            self.away.team_name
        );

        self.stats.set_scores.push(score);
        self.current_set += 1;

        score
    }

    /// Plays sets until one side has won `sets_to_win` of them.
    pub fn play(mut self, rng: &mut dyn RandomSource) -> MatchResult {
        let target = self.settings.sets_to_win as usize;

        let (home_sets, away_sets) = loop {
            self.play_set(rng);

            let home_sets = self.stats.sets_won(self.home.team_id);
            let away_sets = self.stats.sets_won(self.away.team_id);

            if home_sets >= target || away_sets >= target {
                break (home_sets, away_sets);
            }

            self.home.rest();
            self.away.rest();
        };

        let (winner, loser) = if home_sets > away_sets {
            (self.home.team_id, self.away.team_id)
        } else {
            (self.away.team_id, self.home.team_id)
        };

        self.stats.winning_team_id = Some(winner);
        self.stats.losing_team_id = Some(loser);

        debug!(
            "{} finished {}-{}, winner {}",
            self.id, home_sets, away_sets, winner
        );

        MatchResult {
            stats: self.stats,
            home: self.home,
            away: self.away,
        }
    }
}
