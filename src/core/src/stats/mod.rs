pub mod game;
pub mod player;

pub use game::*;
pub use player::*;
