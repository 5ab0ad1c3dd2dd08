#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Skill {
    Jumping,
    Power,
    Consistency,
    Setting,
    Blocking,
    Passing,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::Jumping,
        Skill::Power,
        Skill::Consistency,
        Skill::Setting,
        Skill::Blocking,
        Skill::Passing,
    ];
}

/// Static skill ratings, each on a 0-100 scale.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PlayerSkills {
    pub jumping: f32,
    pub power: f32,
    pub consistency: f32,
    pub setting: f32,
    pub blocking: f32,
    pub passing: f32,
}

impl PlayerSkills {
    pub fn get(&self, skill: Skill) -> f32 {
        match skill {
            Skill::Jumping => self.jumping,
            Skill::Power => self.power,
            Skill::Consistency => self.consistency,
            Skill::Setting => self.setting,
            Skill::Blocking => self.blocking,
            Skill::Passing => self.passing,
        }
    }

    /// Unweighted mean of the six skills.
    pub fn overall(&self) -> f32 {
        Skill::ALL.iter().map(|&skill| self.get(skill)).sum::<f32>() / Skill::ALL.len() as f32
    }
}
