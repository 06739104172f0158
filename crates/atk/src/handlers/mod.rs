pub mod atk;
pub mod error;
pub mod health;

pub use error::AppError;
