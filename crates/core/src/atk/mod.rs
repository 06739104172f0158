mod error;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use error::ValidationError;
pub use mock_data::seed_items;
pub use operations::{filter_by_deleted, next_id, validate_input};
pub use requests::AtkInput;
pub use types::{Atk, AtkId};
