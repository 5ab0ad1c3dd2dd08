use crate::club::{PlayerCollection, TeamCollection};
use crate::error::{LeagueError, LeagueResult};
use crate::r#match::{FixtureId, Game, MatchResult, MatchTeam};
use crate::stats::GameStats;
use crate::utils::{Logging, RandomSource, SimulationRng};
use log::{debug, info};
use rayon::prelude::*;

pub const TEAMS_PER_SEASON: usize = 10;
pub const WEEKS_PER_SEASON: usize = 18;

/// Circle-method rounds needed for every pair to meet once.
const ROUNDS_PER_LEG: usize = TEAMS_PER_SEASON - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixture {
    pub home_team_id: u32,
    pub away_team_id: u32,
}

impl Fixture {
    pub fn new(home_team_id: u32, away_team_id: u32) -> Self {
        Fixture {
            home_team_id,
            away_team_id,
        }
    }

    pub fn id(&self, week: usize) -> FixtureId {
        FixtureId::new(self.home_team_id, self.away_team_id, week as u32)
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn opponent_of(&self, team_id: u32) -> Option<u32> {
        match team_id {
            id if id == self.home_team_id => Some(self.away_team_id),
            id if id == self.away_team_id => Some(self.home_team_id),
            _ => None,
        }
    }

    fn reversed(&self) -> Self {
        Fixture::new(self.away_team_id, self.home_team_id)
    }
}

/// Ten-team double round robin, simulated one week at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub year: u32,
    pub team_ids: Vec<u32>,
    pub current_week: usize,
    schedule: Vec<Vec<Fixture>>,
    /// Filled once playoffs are seeded; nothing seeds them yet.
    pub playoff_schedule: Vec<Vec<Fixture>>,
}

impl Season {
    pub fn new(team_ids: Vec<u32>, year: u32) -> LeagueResult<Self> {
        Self::check_team_count(&team_ids)?;

        let schedule = Self::generate_schedule(&team_ids);

        Ok(Season {
            year,
            team_ids,
            current_week: 0,
            schedule,
            playoff_schedule: Vec::new(),
        })
    }

    /// Rebuilds a stored season, keeping its schedule and week pointer.
    pub fn restore(
        team_ids: Vec<u32>,
        year: u32,
        current_week: usize,
        schedule: Vec<Vec<Fixture>>,
        playoff_schedule: Vec<Vec<Fixture>>,
    ) -> LeagueResult<Self> {
        Self::check_team_count(&team_ids)?;

        Ok(Season {
            year,
            team_ids,
            current_week,
            schedule,
            playoff_schedule,
        })
    }

    fn check_team_count(team_ids: &[u32]) -> LeagueResult<()> {
        if team_ids.len() != TEAMS_PER_SEASON {
            return Err(LeagueError::InvalidTeamCount {
                expected: TEAMS_PER_SEASON,
                actual: team_ids.len(),
            });
        }

        Ok(())
    }

    /// Fixes the first team and turns the other nine like a wheel: after each round the last
    /// team moves to the second position. Position `i` meets position `n - 1 - i`.
    /// The second leg replays the first with home and away swapped.
    fn generate_schedule(team_ids: &[u32]) -> Vec<Vec<Fixture>> {
        let teams = team_ids.len();
        let mut rotation = team_ids.to_vec();
        let mut first_leg: Vec<Vec<Fixture>> = Vec::with_capacity(ROUNDS_PER_LEG);

        for _ in 0..ROUNDS_PER_LEG {
            let week: Vec<Fixture> = (0..teams / 2)
                .map(|i| Fixture::new(rotation[i], rotation[teams - 1 - i]))
                .collect();
            first_leg.push(week);

            if let Some(last) = rotation.pop() {
                rotation.insert(1, last);
            }
        }

        let second_leg: Vec<Vec<Fixture>> = first_leg
            .iter()
            .map(|week| week.iter().map(Fixture::reversed).collect())
            .collect();

        first_leg.into_iter().chain(second_leg).collect()
    }

    pub fn schedule(&self) -> &[Vec<Fixture>] {
        &self.schedule
    }

    pub fn week(&self, week: usize) -> Option<&[Fixture]> {
        self.schedule.get(week).map(|fixtures| fixtures.as_slice())
    }

    pub fn is_over(&self) -> bool {
        self.current_week >= self.schedule.len()
    }

    pub fn opponent_for(&self, team_id: u32, week: usize) -> Option<u32> {
        self.week(week)?
            .iter()
            .find_map(|fixture| fixture.opponent_of(team_id))
    }

    /// Plays every fixture of the current week and advances the week pointer.
    ///
    /// Lineups are rebuilt and each game gets private copies of its players plus its own seed,
    /// drawn from `rng` in fixture order, so the week replays identically from the same seed
    /// however rayon schedules the games. Results are written back in fixture order, then every
    /// player gets the weekly rest.
    pub fn simulate_week(
        &mut self,
        teams: &mut TeamCollection,
        players: &mut PlayerCollection,
        rng: &mut dyn RandomSource,
    ) -> LeagueResult<Vec<GameStats>> {
        if self.is_over() {
            info!("season {}: all regular season weeks have been simulated", self.year);
            return Ok(Vec::new());
        }

        let week = self.current_week;
        info!("season {}: simulating week {}", self.year, week + 1);

        let mut games = Vec::with_capacity(self.schedule[week].len());

        for fixture in &self.schedule[week] {
            let home = Self::prepare_team(fixture.home_team_id, teams, players)?;
            let away = Self::prepare_team(fixture.away_team_id, teams, players)?;

            games.push((Game::new(fixture.id(week), home, away), rng.next_seed()));
        }

        let results: Vec<MatchResult> = games
            .into_par_iter()
            .map(|(game, seed)| {
                let message = format!("play game {}", game.id);
                Logging::estimate_result(|| game.play(&mut SimulationRng::seeded(seed)), &message)
            })
            .collect();

        let mut week_stats = Vec::with_capacity(results.len());
        for result in results {
            week_stats.push(result.write_back(teams, players)?);
        }

        players.rest_week();
        self.current_week += 1;

        debug!("season {}: week {} produced {} games", self.year, week + 1, week_stats.len());

        Ok(week_stats)
    }

    fn prepare_team(
        team_id: u32,
        teams: &mut TeamCollection,
        players: &PlayerCollection,
    ) -> LeagueResult<MatchTeam> {
        let team = teams.by_id_mut(team_id)?;
        team.set_lineup(players);

        MatchTeam::new(team, players)
    }
}
