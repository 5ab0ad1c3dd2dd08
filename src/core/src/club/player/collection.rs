use crate::club::Player;
use log::warn;
use std::collections::HashMap;

/// Global player table, keyed by player id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerCollection {
    players: HashMap<u32, Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection {
            players: players.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.players.contains_key(&id)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.values_mut()
    }

    /// Resolves ids against the table, skipping (and reporting) ids that are not loaded.
    pub fn resolve<'p>(&'p self, ids: &[u32]) -> Vec<&'p Player> {
        ids.iter()
            .filter_map(|id| {
                let player = self.players.get(id);
                if player.is_none() {
                    warn!("player {} is not in the player pool, skipping", id);
                }
                player
            })
            .collect()
    }

    /// Private copy of the listed players, used as a match-local view.
    pub fn subset(&self, ids: &[u32]) -> PlayerCollection {
        PlayerCollection::new(self.resolve(ids).into_iter().cloned().collect())
    }

    /// Writes match-local copies back into the table.
    pub fn merge(&mut self, players: impl IntoIterator<Item = Player>) {
        for player in players {
            self.players.insert(player.id, player);
        }
    }

    pub fn rest_week(&mut self) {
        self.players.values_mut().for_each(|p| p.rest_week());
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerEnergy, PlayerPosition};
    use crate::testing::player_with;

    #[test]
    fn test_resolve_skips_missing_ids() {
        let players = PlayerCollection::new(vec![
            player_with(1, PlayerPosition::Setter, 60.0),
            player_with(2, PlayerPosition::Hitter, 60.0),
        ]);

        let resolved = players.resolve(&[1, 99, 2]);
        assert_eq!(resolved.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_subset_is_a_private_copy() {
        let players = PlayerCollection::new(vec![player_with(1, PlayerPosition::Setter, 60.0)]);

        let mut subset = players.subset(&[1]);
        subset.get_mut(1).unwrap().energy = PlayerEnergy::new(10.0);

        assert_eq!(players.get(1).unwrap().current_energy(), 100.0);

        let mut table = players.clone();
        table.merge(subset.into_players());
        assert_eq!(table.get(1).unwrap().current_energy(), 10.0);
    }

    #[test]
    fn test_rest_week_applies_to_everyone() {
        let mut tired = player_with(1, PlayerPosition::Setter, 60.0);
        tired.energy = PlayerEnergy::new(50.0);
        tired.stamina = 0.0;

        let mut players = PlayerCollection::new(vec![tired]);
        players.rest_week();

        assert_eq!(players.get(1).unwrap().current_energy(), 60.0);
    }
}
