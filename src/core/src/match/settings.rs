pub const POINTS_TO_WIN_SET: u32 = 25;
pub const SET_WINNING_MARGIN: u32 = 2;
pub const SETS_TO_WIN: u32 = 3;
pub const SUBSTITUTIONS_PER_SET: u32 = 5;
pub const FATIGUE_THRESHOLD: f32 = 1500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    pub points_to_win_set: u32,
    pub set_winning_margin: u32,
    pub sets_to_win: u32,
    pub substitutions_per_set: u32,
    /// Fatigue score above which an on-court player is substituted.
    pub fatigue_threshold: f32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            points_to_win_set: POINTS_TO_WIN_SET,
            set_winning_margin: SET_WINNING_MARGIN,
            sets_to_win: SETS_TO_WIN,
            substitutions_per_set: SUBSTITUTIONS_PER_SET,
            fatigue_threshold: FATIGUE_THRESHOLD,
        }
    }
}
