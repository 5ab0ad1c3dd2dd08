use crate::club::Team;
use crate::error::{LeagueError, LeagueResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamCollection {
    pub teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new(teams: Vec<Team>) -> Self {
        TeamCollection { teams }
    }

    pub fn by_id(&self, id: u32) -> LeagueResult<&Team> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .ok_or(LeagueError::TeamNotFound(id))
    }

    pub fn by_id_mut(&mut self, id: u32) -> LeagueResult<&mut Team> {
        self.teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LeagueError::TeamNotFound(id))
    }

    pub fn ids(&self) -> Vec<u32> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn user_team(&self) -> Option<&Team> {
        self.teams.iter().find(|t| t.user_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: u32, user_team: bool) -> Team {
        Team::builder()
            .id(id)
            .name(format!("Team {}", id))
            .user_team(user_team)
            .build()
            .unwrap()
    }

    #[test]
    fn test_user_team() {
        let teams = TeamCollection::new(vec![team(0, false), team(1, true), team(2, false)]);
        assert_eq!(teams.user_team().map(|t| t.id), Some(1));
    }

    #[test]
    fn test_missing_team() {
        let teams = TeamCollection::new(vec![team(0, false)]);
        assert_eq!(teams.by_id(7).unwrap_err(), LeagueError::TeamNotFound(7));
    }
}
