pub mod attributes;
pub mod builder;
pub mod collection;
pub mod player;
pub mod position;
pub mod skills;

pub use attributes::*;
pub use builder::*;
pub use collection::*;
pub use player::*;
pub use position::*;
pub use skills::*;
