//! In-memory storage backend.
//!
//! Records live in a `Vec` behind a single `tokio::sync::Mutex`. Every
//! operation, reads included, takes the same lock, so memory-mode operations
//! are globally serialized. Data is lost when the process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use atk::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::with_records(atk_core::atk::seed_items());
//! ```

mod repository;

pub use repository::InMemoryRepository;
