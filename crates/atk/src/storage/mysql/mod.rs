//! MySQL storage backend implementation.
//!
//! Uses a `sqlx` connection pool. Concurrency control is left to the pool
//! and the server's transaction isolation.

mod error;
mod repository;
mod schema;

pub use repository::MySqlRepository;
