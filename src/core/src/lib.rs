pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod snapshot;
pub mod stats;
pub mod utils;

#[cfg(test)]
mod testing;

pub use club::{
    CourtLineup, Lineup, LineupPreferences, Player, PlayerBuilder, PlayerCollection,
    PlayerEnergy, PlayerPosition, PlayerSkills, Skill, Substitution, Team, TeamBuilder,
    TeamCollection,
};
pub use error::{LeagueError, LeagueResult};
pub use league::{
    Fixture, League, LeagueTable, MatchStorage, Season, TeamRecord, TEAMS_PER_SEASON,
    WEEKS_PER_SEASON,
};
pub use r#match::{FixtureId, Game, MatchResult, MatchSettings, MatchTeam};
pub use snapshot::{
    FixtureData, GameStatsData, LeagueData, PlayerData, PlayerStatsData, SeasonData,
    SetScoreData, TeamData,
};
pub use stats::{merge_player_stats, GameStats, PlayerStats, SetScore};
pub use utils::{RandomSource, SimulationRng};
