use crate::club::{Player, PlayerCollection, Team, TeamCollection};
use crate::error::{LeagueError, LeagueResult};
use crate::league::{League, MatchStorage, Season};
use crate::snapshot::{GameStatsData, PlayerData, PlayerStatsData, SeasonData, TeamData};
use crate::stats::{GameStats, PlayerStats};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueData {
    pub current_season_year: u32,
    pub teams: Vec<TeamData>,
    pub players: Vec<PlayerData>,
    #[serde(default)]
    pub seasons: Vec<SeasonData>,
    /// Completed games per season year.
    #[serde(default)]
    pub games: BTreeMap<u32, Vec<GameStatsData>>,
    /// Cumulative season stats keyed by `"{playerId}-{year}"`.
    #[serde(default)]
    pub player_stats: BTreeMap<String, PlayerStatsData>,
}

impl League {
    pub fn to_plain_data(&self) -> LeagueData {
        LeagueData {
            current_season_year: self.current_season_year,
            teams: self.teams.teams.iter().map(Team::to_plain_data).collect(),
            players: self
                .players
                .players()
                .sorted_by_key(|p| p.id)
                .map(Player::to_plain_data)
                .collect(),
            seasons: self.seasons.iter().map(Season::to_plain_data).collect(),
            games: self
                .games
                .iter()
                .map(|(&year, storage)| {
                    let games = storage
                        .games()
                        .sorted_by_key(|g| g.game_id)
                        .map(GameStats::to_plain_data)
                        .collect();
                    (year, games)
                })
                .collect(),
            player_stats: self
                .player_stats
                .iter()
                .map(|(id, stats)| (id.clone(), stats.to_plain_data()))
                .collect(),
        }
    }

    /// A snapshot without seasons gets a fresh one for its current year.
    pub fn from_plain_data(data: LeagueData) -> LeagueResult<League> {
        let teams = TeamCollection::new(
            data.teams
                .into_iter()
                .map(Team::from_plain_data)
                .collect::<LeagueResult<Vec<_>>>()?,
        );

        let players =
            PlayerCollection::new(data.players.into_iter().map(Player::from_plain_data).collect());

        let mut seasons = data
            .seasons
            .into_iter()
            .map(Season::from_plain_data)
            .collect::<LeagueResult<Vec<_>>>()?;

        if seasons.is_empty() {
            seasons.push(Season::new(teams.ids(), data.current_season_year)?);
        } else if !seasons.iter().any(|s| s.year == data.current_season_year) {
            return Err(LeagueError::SeasonNotFound(data.current_season_year));
        }

        let mut games = HashMap::new();
        for (year, stored) in data.games {
            let mut storage = MatchStorage::new();
            for game in stored {
                storage.push(GameStats::from_plain_data(game)?)?;
            }
            games.insert(year, storage);
        }

        let player_stats = data
            .player_stats
            .into_iter()
            .map(|(id, stats)| (id, PlayerStats::from_plain_data(stats)))
            .collect();

        Ok(League {
            current_season_year: data.current_season_year,
            seasons,
            teams,
            players,
            games,
            player_stats,
        })
    }
}
