use crate::club::team::lineup::{Lineup, LineupPreferences};
use crate::club::Team;

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    player_ids: Option<Vec<u32>>,
    user_team: Option<bool>,
    lineup_preferences: Option<Option<LineupPreferences>>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn player_ids(mut self, player_ids: Vec<u32>) -> Self {
        self.player_ids = Some(player_ids);
        self
    }

    pub fn user_team(mut self, user_team: bool) -> Self {
        self.user_team = Some(user_team);
        self
    }

    pub fn lineup_preferences(mut self, lineup_preferences: Option<LineupPreferences>) -> Self {
        self.lineup_preferences = Some(lineup_preferences);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let player_ids = self.player_ids.unwrap_or_default();

        for (index, id) in player_ids.iter().enumerate() {
            if player_ids[..index].contains(id) {
                return Err(format!("player {} appears twice in the roster", id));
            }
        }

        Ok(Team {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            player_ids,
            user_team: self.user_team.unwrap_or(false),
            lineup_preferences: self.lineup_preferences.unwrap_or(None),
            lineup: Lineup::default(),
        })
    }
}
