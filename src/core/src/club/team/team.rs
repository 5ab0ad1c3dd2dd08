use crate::club::team::builder::TeamBuilder;
use crate::club::team::lineup::{Lineup, LineupPreferences, LineupSelector};
use crate::club::{Player, PlayerCollection};
use crate::error::{LeagueError, LeagueResult};
use log::{debug, warn};

#[derive(Debug, Clone)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub player_ids: Vec<u32>,
    pub user_team: bool,
    pub lineup_preferences: Option<LineupPreferences>,

    /// Derived before every match; not part of the persisted snapshot.
    pub lineup: Lineup,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn add_player(&mut self, player: &mut Player) -> LeagueResult<()> {
        if self.player_ids.contains(&player.id) {
            return Err(LeagueError::DuplicatePlayer {
                team_id: self.id,
                player_id: player.id,
            });
        }

        self.player_ids.push(player.id);
        player.team_id = Some(self.id);

        Ok(())
    }

    /// Preference ordering is only honoured for the user-controlled team.
    pub fn preferences(&self) -> Option<&LineupPreferences> {
        if self.user_team {
            self.lineup_preferences.as_ref()
        } else {
            None
        }
    }

    /// Rebuilds the starting six from the roster. Roster ids missing from the pool are skipped.
    pub fn set_lineup(&mut self, pool: &PlayerCollection) {
        let available = pool.resolve(&self.player_ids);

        let lineup = LineupSelector::new(available, self.preferences()).select();

        if !lineup.is_complete() {
            warn!(
                "team {} could only fill {} lineup slots",
                self.name,
                lineup.filled()
            );
        }

        debug!("lineup for {}: {:?}", self.name, lineup);

        self.lineup = lineup;
    }

    pub fn average_overall(&self, pool: &PlayerCollection) -> f32 {
        let players = pool.resolve(&self.player_ids);
        if players.is_empty() {
            return 0.0;
        }

        players.iter().map(|p| p.overall()).sum::<f32>() / players.len() as f32
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.player_ids == other.player_ids
            && self.user_team == other.user_team
            && self.lineup_preferences == other.lineup_preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerPosition;
    use crate::testing::{player_with, roster};

    #[test]
    fn test_add_player_sets_affiliation() {
        let mut team = Team::builder().id(3).name("Harbor Hawks").build().unwrap();
        let mut player = player_with(10, PlayerPosition::Hitter, 60.0);

        team.add_player(&mut player).unwrap();

        assert_eq!(team.player_ids, vec![10]);
        assert_eq!(player.team_id, Some(3));
    }

    #[test]
    fn test_add_duplicate_player_fails() {
        let mut team = Team::builder().id(3).name("Harbor Hawks").build().unwrap();
        let mut player = player_with(10, PlayerPosition::Hitter, 60.0);

        team.add_player(&mut player).unwrap();

        assert_eq!(
            team.add_player(&mut player),
            Err(LeagueError::DuplicatePlayer {
                team_id: 3,
                player_id: 10
            })
        );
        assert_eq!(team.player_ids, vec![10]);
    }

    #[test]
    fn test_set_lineup_skips_missing_players() {
        let (mut team, players) = roster(1, 100);
        team.player_ids.insert(0, 9999);

        let pool = PlayerCollection::new(players);
        team.set_lineup(&pool);

        assert!(team.lineup.is_complete());
        assert!(!team.lineup.contains(9999));
    }

    #[test]
    fn test_preferences_ignored_for_computer_teams() {
        let (mut team, _) = roster(1, 100);
        team.lineup_preferences = Some(LineupPreferences::new());

        assert!(team.preferences().is_none());

        team.user_team = true;
        assert!(team.preferences().is_some());
    }

    #[test]
    fn test_equality_ignores_derived_lineup() {
        let (mut team, players) = roster(1, 100);
        let snapshot = team.clone();

        team.set_lineup(&PlayerCollection::new(players));

        assert_eq!(team, snapshot);
    }
}
