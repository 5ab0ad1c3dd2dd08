pub mod league;
pub mod season;
pub mod storage;
pub mod table;

pub use league::*;
pub use season::*;
pub use storage::*;
pub use table::*;
