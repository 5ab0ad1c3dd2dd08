pub mod builder;
pub mod collection;
pub mod lineup;
pub mod rotation;
pub mod team;

pub use builder::*;
pub use collection::*;
pub use lineup::{
    BACK_ROW, CourtLineup, FRONT_ROW, LINEUP_SIZE, Lineup, LineupPreferences, ROTATION_ORDER,
};
pub use rotation::*;
pub use team::*;
