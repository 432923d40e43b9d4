pub mod args;
pub mod error;
pub mod model;
pub mod handicap {
    pub mod record;
    pub mod system;
}
pub mod controller {
    pub mod handicap_update;
    pub mod hole_results;
    pub mod schedule;
}

pub use error::AppError;
pub use handicap::record::{get_handicap_index_data, get_rounds_in_scoring_record};
pub use handicap::system::HandicapSystem;
