pub mod database;
pub mod flight;
pub mod golfer;
pub mod round;
pub mod types;

pub use database::*;
pub use flight::*;
pub use golfer::*;
pub use round::*;
pub use types::*;
