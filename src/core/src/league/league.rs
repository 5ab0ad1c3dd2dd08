use crate::club::{Player, PlayerCollection, Team, TeamCollection};
use crate::error::{LeagueError, LeagueResult};
use crate::league::{LeagueTable, MatchStorage, Season};
use crate::stats::{GameStats, PlayerStats};
use crate::utils::RandomSource;
use log::info;
use std::collections::HashMap;

/// The whole persistent world: teams, players, every season and the stats they produced.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub current_season_year: u32,
    pub seasons: Vec<Season>,
    pub teams: TeamCollection,
    pub players: PlayerCollection,
    /// Completed games per season year.
    pub games: HashMap<u32, MatchStorage>,
    /// Cumulative season stats keyed by `PlayerStats::stat_id`.
    pub player_stats: HashMap<String, PlayerStats>,
}

impl League {
    pub fn new(year: u32, teams: Vec<Team>, players: Vec<Player>) -> LeagueResult<Self> {
        let teams = TeamCollection::new(teams);
        let season = Season::new(teams.ids(), year)?;

        Ok(League {
            current_season_year: year,
            seasons: vec![season],
            teams,
            players: PlayerCollection::new(players),
            games: HashMap::new(),
            player_stats: HashMap::new(),
        })
    }

    pub fn season(&self, year: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.year == year)
    }

    pub fn current_season(&self) -> Option<&Season> {
        self.season(self.current_season_year)
    }

    /// Opens a new season over the same teams and makes it current. A year can only be
    /// started once, since its games and season stats are kept.
    pub fn start_season(&mut self, year: u32) -> LeagueResult<&Season> {
        if self.season(year).is_some() {
            return Err(LeagueError::SeasonAlreadyStarted(year));
        }

        let season = Season::new(self.teams.ids(), year)?;

        info!("starting season {}", year);

        self.seasons.push(season);
        self.current_season_year = year;

        Ok(&self.seasons[self.seasons.len() - 1])
    }

    /// Simulates the current season's week, records its games and folds every per-game
    /// player line into the cumulative season stats.
    ///
    /// Fails without touching the league when a fixture of the week already has stats.
    pub fn simulate_week(&mut self, rng: &mut dyn RandomSource) -> LeagueResult<Vec<GameStats>> {
        let year = self.current_season_year;

        let season = self
            .seasons
            .iter_mut()
            .find(|s| s.year == year)
            .ok_or(LeagueError::SeasonNotFound(year))?;

        let week = season.current_week;
        if let (Some(fixtures), Some(storage)) = (season.week(week), self.games.get(&year)) {
            if let Some(id) = fixtures
                .iter()
                .map(|fixture| fixture.id(week))
                .find(|id| storage.contains(id))
            {
                return Err(LeagueError::DuplicateGameStats(id.to_string()));
            }
        }

        let week_stats = season.simulate_week(&mut self.teams, &mut self.players, rng)?;

        let storage = self.games.entry(year).or_default();
        for stats in &week_stats {
            storage.push(stats.clone())?;

            for line in stats.player_stats.values() {
                self.player_stats
                    .entry(PlayerStats::stat_id(line.player_id, year))
                    .or_insert_with(|| PlayerStats::new(line.player_id))
                    .merge_from(line);
            }
        }

        Ok(week_stats)
    }

    pub fn storage(&self, year: u32) -> Option<&MatchStorage> {
        self.games.get(&year)
    }

    pub fn season_stats(&self, player_id: u32, year: u32) -> Option<&PlayerStats> {
        self.player_stats.get(&PlayerStats::stat_id(player_id, year))
    }

    /// Current season's table; every team starts at 0-0.
    pub fn table(&self) -> LeagueTable {
        let team_ids = self
            .current_season()
            .map(|s| s.team_ids.clone())
            .unwrap_or_else(|| self.teams.ids());

        match self.storage(self.current_season_year) {
            Some(storage) => storage.table(&team_ids),
            None => LeagueTable::new(&team_ids, std::iter::empty()),
        }
    }

    pub fn user_team(&self) -> Option<&Team> {
        self.teams.user_team()
    }
}
