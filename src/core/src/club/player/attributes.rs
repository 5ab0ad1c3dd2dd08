use crate::utils::FloatUtils;

pub const ENERGY_MAX_VALUE: f32 = 100.0;

// At zero energy every skill is dampened by this share.
const FATIGUE_PENALTY: f32 = 0.2;

const FATIGUE_PER_POINT_MAX: f32 = 0.7;
const FATIGUE_PER_POINT_MIN: f32 = 0.3;

const SET_REST_MIN: f32 = 1.0;
const SET_REST_MAX: f32 = 7.0;

const WEEK_REST_MIN: f32 = 10.0;
const WEEK_REST_MAX: f32 = 20.0;

/// Dynamic energy state, always kept within `[0, ENERGY_MAX_VALUE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerEnergy {
    current: f32,
}

impl Default for PlayerEnergy {
    fn default() -> Self {
        Self::full()
    }
}

impl PlayerEnergy {
    pub fn new(value: f32) -> Self {
        let mut energy = PlayerEnergy { current: 0.0 };
        energy.set(value);
        energy
    }

    pub fn full() -> Self {
        PlayerEnergy {
            current: ENERGY_MAX_VALUE,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// 1.0 at full energy, 0.8 when exhausted.
    pub fn multiplier(&self) -> f32 {
        FloatUtils::round2(1.0 - (1.0 - self.current / ENERGY_MAX_VALUE) * FATIGUE_PENALTY)
    }

    /// Energy lost for one played rally, slower for high-stamina players.
    pub fn drain(&mut self, stamina: f32) {
        let factor = Self::stamina_factor(stamina);
        let per_point = FloatUtils::round2(
            FATIGUE_PER_POINT_MAX - (FATIGUE_PER_POINT_MAX - FATIGUE_PER_POINT_MIN) * factor,
        );

        self.set(FloatUtils::round2(self.current - per_point));
    }

    pub fn rest(&mut self, stamina: f32) {
        self.recover(stamina, SET_REST_MIN, SET_REST_MAX);
    }

    pub fn rest_week(&mut self, stamina: f32) {
        self.recover(stamina, WEEK_REST_MIN, WEEK_REST_MAX);
    }

    fn recover(&mut self, stamina: f32, min: f32, max: f32) {
        let factor = Self::stamina_factor(stamina);
        let recovery = FloatUtils::round2(min + (max - min) * factor);

        self.set(FloatUtils::round2(self.current + recovery));
    }

    fn stamina_factor(stamina: f32) -> f32 {
        (stamina / 100.0).clamp(0.0, 1.0)
    }

    fn set(&mut self, value: f32) {
        self.current = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, ENERGY_MAX_VALUE)
        };
    }
}
