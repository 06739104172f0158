use async_trait::async_trait;

use crate::atk::{Atk, AtkId, AtkInput};

use super::Result;

/// Repository for ATK records with soft-delete semantics.
///
/// Implementations decide how ids are assigned; callers validate input
/// before reaching the repository.
#[async_trait]
pub trait AtkRepository: Send + Sync {
    /// Lists records that are not soft-deleted.
    async fn list(&self) -> Result<Vec<Atk>>;

    /// Lists soft-deleted records.
    async fn list_deleted(&self) -> Result<Vec<Atk>>;

    /// Stores a new active record and returns it with its assigned id.
    async fn create(&self, input: &AtkInput) -> Result<Atk>;

    /// Replaces the fields of an active record.
    ///
    /// Returns `None` when no active record has this id, including when the
    /// record exists but is soft-deleted.
    async fn update(&self, id: AtkId, input: &AtkInput) -> Result<Option<Atk>>;

    /// Soft-deletes an active record. Returns false if none matched.
    async fn delete(&self, id: AtkId) -> Result<bool>;

    /// Restores a soft-deleted record. Returns false if none matched.
    async fn restore(&self, id: AtkId) -> Result<bool>;

    /// Permanently removes a record regardless of its flag.
    async fn hard_delete(&self, id: AtkId) -> Result<bool>;

    /// Checks that the store answers, without reading any records.
    async fn ping(&self) -> Result<()>;

    /// Short name of the backend, used in logs.
    fn backend(&self) -> &'static str;
}
