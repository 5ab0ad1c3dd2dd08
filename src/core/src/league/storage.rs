use crate::error::{LeagueError, LeagueResult};
use crate::league::LeagueTable;
use crate::r#match::FixtureId;
use crate::stats::GameStats;
use std::collections::HashMap;

/// Completed games of one season, keyed by fixture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStorage {
    games: HashMap<FixtureId, GameStats>,
}

impl MatchStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fixture's stats can only be recorded once.
    pub fn push(&mut self, stats: GameStats) -> LeagueResult<()> {
        if self.games.contains_key(&stats.game_id) {
            return Err(LeagueError::DuplicateGameStats(stats.game_id.to_string()));
        }

        self.games.insert(stats.game_id, stats);

        Ok(())
    }

    pub fn contains(&self, id: &FixtureId) -> bool {
        self.games.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games(&self) -> impl Iterator<Item = &GameStats> {
        self.games.values()
    }

    pub fn games_for_week(&self, week: u32) -> impl Iterator<Item = &GameStats> {
        self.games.values().filter(move |g| g.game_id.week == week)
    }

    /// The game `team_id` played in `week`, if it has been played.
    pub fn result_for_team(&self, week: u32, team_id: u32) -> Option<&GameStats> {
        self.games_for_week(week).find(|g| g.involves(team_id))
    }

    pub fn table(&self, team_ids: &[u32]) -> LeagueTable {
        LeagueTable::new(team_ids, self.games())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(home: u32, away: u32, week: u32) -> GameStats {
        let mut stats = GameStats::new(FixtureId::new(home, away, week));
        stats.winning_team_id = Some(home);
        stats.losing_team_id = Some(away);
        stats
    }

    #[test]
    fn test_duplicate_game_is_rejected() {
        let mut storage = MatchStorage::new();
        storage.push(played(1, 2, 0)).unwrap();

        assert_eq!(
            storage.push(played(1, 2, 0)),
            Err(LeagueError::DuplicateGameStats("1-2-0".to_string()))
        );
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_result_for_team() {
        let mut storage = MatchStorage::new();
        storage.push(played(1, 2, 0)).unwrap();
        storage.push(played(3, 4, 0)).unwrap();
        storage.push(played(2, 3, 1)).unwrap();

        let result = storage.result_for_team(1, 3).unwrap();
        assert_eq!(result.game_id, FixtureId::new(2, 3, 1));

        assert!(storage.result_for_team(1, 1).is_none());
        assert!(storage.result_for_team(5, 2).is_none());
    }

    #[test]
    fn test_table_from_storage() {
        let mut storage = MatchStorage::new();
        storage.push(played(1, 2, 0)).unwrap();
        storage.push(played(1, 3, 1)).unwrap();

        let table = storage.table(&[1, 2, 3]);
        assert_eq!(table.record_for(1).wins, 2);
        assert_eq!(table.record_for(3).losses, 1);
    }
}
