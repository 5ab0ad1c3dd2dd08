use serde::{Deserialize, Serialize};

/// Best pass or set quality.
pub const PERFECT_TIER: u32 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallPhase {
    Serve,
    Pass,
    Set,
    Spike,
    Freeball,
}

/// Snapshot of the ball right after one touch.
///
/// `speed` is km/h-like for serves, spikes and freeballs and a 0-3 quality tier
/// for passes and sets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BallTouch {
    pub speed: u32,
    pub in_play: bool,
    pub phase: BallPhase,
    pub player_id: u32,
}
