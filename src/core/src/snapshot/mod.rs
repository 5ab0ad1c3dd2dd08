//! Plain data shapes exchanged with the persistence layer.
//!
//! Engine types never derive serde themselves; each one maps to and from its `*Data`
//! counterpart here with `to_plain_data` / `from_plain_data`.

pub mod league;
pub mod player;
pub mod season;
pub mod stats;
pub mod team;

pub use league::*;
pub use player::*;
pub use season::*;
pub use stats::*;
pub use team::*;
