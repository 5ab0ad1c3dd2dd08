pub mod engine;
pub mod fixture;
pub mod game;
pub mod result;
pub mod settings;
pub mod squad;

pub use fixture::*;
pub use game::*;
pub use result::*;
pub use settings::*;
pub use squad::*;
