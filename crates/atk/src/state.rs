//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The store is a trait object so handlers never depend on
//! a particular backend.

use std::sync::Arc;

use atk_core::atk::seed_items;
use atk_core::storage::AtkRepository;

use crate::config::Config;
use crate::storage::{self, InMemoryRepository};

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// ATK repository selected at startup.
    pub atk_repo: Arc<dyn AtkRepository>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn new(atk_repo: Arc<dyn AtkRepository>) -> Self {
        Self { atk_repo }
    }

    /// Creates an AppState backed by a memory store holding the demo records.
    pub fn with_demo_data() -> Self {
        Self::new(Arc::new(InMemoryRepository::with_records(seed_items())))
    }

    /// Creates the AppState described by `config`.
    ///
    /// A configured database that cannot be opened or migrated is logged and
    /// replaced by the memory store; startup never fails because of it.
    pub async fn from_config(config: &Config) -> Self {
        if let Some(target) = &config.database {
            match storage::connect(target).await {
                Ok(repo) => {
                    tracing::info!(
                        backend = repo.backend(),
                        database = %target.redacted(),
                        "Connected to database and initialized table mst_atk"
                    );
                    return Self::new(repo);
                }
                Err(err) => {
                    tracing::error!(
                        engine = target.engine(),
                        database = %target.redacted(),
                        error = %err,
                        "Database initialization failed, falling back to the in-memory store"
                    );
                }
            }
        }

        let state = if config.seed {
            Self::with_demo_data()
        } else {
            Self::default()
        };
        tracing::info!(seeded = config.seed, "Using the in-memory store");
        state
    }
}
