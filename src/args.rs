pub mod types;
pub mod validation;

pub use types::{Args, Command, args_checks};
