use crate::club::{Player, PlayerEnergy, PlayerPosition, PlayerSkills};

#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    name: Option<String>,
    position: Option<PlayerPosition>,
    skills: Option<PlayerSkills>,
    stamina: Option<f32>,
    energy: Option<PlayerEnergy>,
    team_id: Option<Option<u32>>,
}

impl PlayerBuilder {
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

    pub fn position(mut self, position: PlayerPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn stamina(mut self, stamina: f32) -> Self {
        self.stamina = Some(stamina);
        self
    }

    pub fn energy(mut self, energy: f32) -> Self {
        self.energy = Some(PlayerEnergy::new(energy));
        self
    }

    pub fn team_id(mut self, team_id: Option<u32>) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            position: self.position.ok_or("position is required")?,
            skills: self.skills.ok_or("skills is required")?,
            stamina: self.stamina.ok_or("stamina is required")?,
            energy: self.energy.unwrap_or_default(),
            team_id: self.team_id.unwrap_or(None),
        })
    }
}
