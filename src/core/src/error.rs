use thiserror::Error;

pub type LeagueResult<T> = Result<T, LeagueError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("season must be initialized with exactly {expected} teams, got {actual}")]
    InvalidTeamCount { expected: usize, actual: usize },

    #[error("fixture id `{0}` is not formatted as home-away-week")]
    MalformedFixtureId(String),

    #[error("player {player_id} is already on the roster of team {team_id}")]
    DuplicatePlayer { team_id: u32, player_id: u32 },

    #[error("stats for game {0} are already recorded")]
    DuplicateGameStats(String),

    #[error("team {0} not found")]
    TeamNotFound(u32),

    #[error("team {team_id} can only field {available} of 6 lineup slots")]
    IncompleteLineup { team_id: u32, available: usize },

    #[error("season {0} has already been started")]
    SeasonAlreadyStarted(u32),

    #[error("no season found for year {0}")]
    SeasonNotFound(u32),
}

impl LeagueError {
    /// Configuration errors come from bad caller input; everything else is a broken invariant.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LeagueError::InvalidTeamCount { .. }
                | LeagueError::MalformedFixtureId(_)
                | LeagueError::SeasonAlreadyStarted(_)
                | LeagueError::SeasonNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        assert!(LeagueError::InvalidTeamCount { expected: 10, actual: 9 }.is_configuration());
        assert!(LeagueError::MalformedFixtureId("3-7".to_string()).is_configuration());
        assert!(!LeagueError::DuplicatePlayer { team_id: 1, player_id: 2 }.is_configuration());
        assert!(!LeagueError::DuplicateGameStats("1-2-0".to_string()).is_configuration());
        assert!(LeagueError::SeasonAlreadyStarted(2025).is_configuration());
        assert!(LeagueError::SeasonNotFound(2031).is_configuration());
    }

    #[test]
    fn test_error_messages() {
        let error = LeagueError::InvalidTeamCount { expected: 10, actual: 4 };
        assert_eq!(
            error.to_string(),
            "season must be initialized with exactly 10 teams, got 4"
        );
    }
}
