use crate::error::LeagueError;
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

/// Identifies one scheduled game; its string form `"{home}-{away}-{week}"` is the storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixtureId {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub week: u32,
}

impl FixtureId {
    pub fn new(home_team_id: u32, away_team_id: u32, week: u32) -> Self {
        FixtureId {
            home_team_id,
            away_team_id,
            week,
        }
    }

    pub fn team_ids(&self) -> (u32, u32) {
        (self.home_team_id, self.away_team_id)
    }
}

impl Display for FixtureId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-{}-{}", self.home_team_id, self.away_team_id, self.week)
    }
}

impl FromStr for FixtureId {
    type Err = LeagueError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let malformed = || LeagueError::MalformedFixtureId(s.to_string());

        let parts: Vec<&str> = s.split('-').collect();
        let [home, away, week] = parts.as_slice() else {
            return Err(malformed());
        };

        Ok(FixtureId {
            home_team_id: home.parse().map_err(|_| malformed())?,
            away_team_id: away.parse().map_err(|_| malformed())?,
            week: week.parse().map_err(|_| malformed())?,
        })
    }
}
