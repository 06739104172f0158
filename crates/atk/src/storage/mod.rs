//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`AtkRepository`]
//! trait defined in `atk_core::storage`. The backend is chosen at startup
//! from the configured database target.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite backend using `rusqlite` and `tokio-rusqlite`
//! - `mysql` (default): MySQL backend using `sqlx`
//!
//! The in-memory backend is always compiled in.

use std::sync::Arc;

use atk_core::storage::{AtkRepository, RepositoryError, Result};

use crate::config::DatabaseTarget;

pub mod inmemory;

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;

/// Opens the relational backend described by `target`.
///
/// Fails when the connection or the schema migration fails, or when the
/// backend was not compiled in.
pub async fn connect(target: &DatabaseTarget) -> Result<Arc<dyn AtkRepository>> {
    match target {
        #[cfg(feature = "sqlite")]
        DatabaseTarget::SqliteMemory => {
            let repo = sqlite::SqliteRepository::new_in_memory().await?;
            Ok(Arc::new(repo))
        }
        #[cfg(feature = "sqlite")]
        DatabaseTarget::SqliteFile(path) => {
            let repo = sqlite::SqliteRepository::new(path).await?;
            Ok(Arc::new(repo))
        }
        #[cfg(feature = "mysql")]
        DatabaseTarget::MySql(url) => {
            let repo = mysql::MySqlRepository::connect(url).await?;
            Ok(Arc::new(repo))
        }
        #[allow(unreachable_patterns)]
        other => Err(RepositoryError::ConnectionFailed(format!(
            "{} support is not compiled in",
            other.engine()
        ))),
    }
}
