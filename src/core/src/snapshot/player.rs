use crate::club::{Player, PlayerEnergy, PlayerPosition, PlayerSkills};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub id: u32,
    pub name: String,
    pub position: PlayerPosition,
    pub jumping: f32,
    pub power: f32,
    pub consistency: f32,
    pub setting: f32,
    pub blocking: f32,
    pub passing: f32,
    pub stamina: f32,
    pub current_energy: f32,
    #[serde(default)]
    pub team_id: Option<u32>,
}

impl Player {
    pub fn to_plain_data(&self) -> PlayerData {
        PlayerData {
            id: self.id,
            name: self.name.clone(),
            position: self.position,
            jumping: self.skills.jumping,
            power: self.skills.power,
            consistency: self.skills.consistency,
            setting: self.skills.setting,
            blocking: self.skills.blocking,
            passing: self.skills.passing,
            stamina: self.stamina,
            current_energy: self.current_energy(),
            team_id: self.team_id,
        }
    }

    /// Out-of-range energy is clamped on the way in.
    pub fn from_plain_data(data: PlayerData) -> Player {
        Player {
            id: data.id,
            name: data.name,
            position: data.position,
            skills: PlayerSkills {
                jumping: data.jumping,
                power: data.power,
                consistency: data.consistency,
                setting: data.setting,
                blocking: data.blocking,
                passing: data.passing,
            },
            stamina: data.stamina,
            energy: PlayerEnergy::new(data.current_energy),
            team_id: data.team_id,
        }
    }
}
