use crate::club::player::builder::PlayerBuilder;
use crate::club::{PlayerEnergy, PlayerPosition, PlayerSkills, Skill};
use crate::utils::FloatUtils;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPosition,

    pub skills: PlayerSkills,
    pub stamina: f32,
    pub energy: PlayerEnergy,

    pub team_id: Option<u32>,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn overall(&self) -> f32 {
        self.skills.overall()
    }

    pub fn current_energy(&self) -> f32 {
        self.energy.current()
    }

    /// Raw skill scaled down by fatigue. Energy never raises a skill above its rating.
    pub fn effective(&self, skill: Skill) -> f32 {
        FloatUtils::round2(self.skills.get(skill) * self.energy.multiplier())
    }

    pub fn is_libero(&self) -> bool {
        self.position == PlayerPosition::Libero
    }

    /// Grows with both tiredness and a low rating; drives fatigue substitutions.
    pub fn fatigue_score(&self) -> f32 {
        (100.0 - self.current_energy()) * (110.0 - self.overall())
    }

    /// Called for every on-court player after each rally.
    pub fn fatigue(&mut self) {
        self.energy.drain(self.stamina);
    }

    /// Short recovery between sets.
    pub fn rest(&mut self) {
        self.energy.rest(self.stamina);
    }

    /// Recovery applied once per scheduled week.
    pub fn rest_week(&mut self) {
        self.energy.rest_week(self.stamina);
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.id)
    }
}
