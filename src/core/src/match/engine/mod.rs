pub mod actions;
pub mod ball;
pub mod engine;

pub use actions::*;
pub use ball::*;
pub use engine::*;
