use crate::club::{Lineup, LineupPreferences, PlayerPosition, Team};
use crate::error::{LeagueError, LeagueResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamData {
    pub id: u32,
    pub name: String,
    pub player_ids: Vec<u32>,
    #[serde(default)]
    pub user_team: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineup_preferences: Option<HashMap<PlayerPosition, Vec<u32>>>,
}

impl Team {
    /// The derived lineup is not part of the plain data.
    pub fn to_plain_data(&self) -> TeamData {
        TeamData {
            id: self.id,
            name: self.name.clone(),
            player_ids: self.player_ids.clone(),
            user_team: self.user_team,
            lineup_preferences: self.lineup_preferences.as_ref().map(|preferences| {
                preferences
                    .iter()
                    .map(|(&position, ids)| (position, ids.clone()))
                    .collect()
            }),
        }
    }

    pub fn from_plain_data(data: TeamData) -> LeagueResult<Team> {
        for (index, &id) in data.player_ids.iter().enumerate() {
            if data.player_ids[..index].contains(&id) {
                return Err(LeagueError::DuplicatePlayer {
                    team_id: data.id,
                    player_id: id,
                });
            }
        }

        let lineup_preferences = data.lineup_preferences.map(|ranked| {
            let mut preferences = LineupPreferences::new();
            for (position, ids) in ranked {
                preferences.set(position, ids);
            }
            preferences
        });

        Ok(Team {
            id: data.id,
            name: data.name,
            player_ids: data.player_ids,
            user_team: data.user_team,
            lineup_preferences,
            lineup: Lineup::default(),
        })
    }
}
