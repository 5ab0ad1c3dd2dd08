mod float;
mod logging;
pub mod random;

pub use float::*;
pub use logging::*;
pub use random::*;
