//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use atk_core::atk::{filter_by_deleted, next_id, Atk, AtkId, AtkInput};
use atk_core::storage::{AtkRepository, Result};

/// Records plus the next id to hand out.
///
/// `next_id` only moves forward, so an id freed by a hard delete is never
/// assigned again.
#[derive(Debug)]
struct Inner {
    records: Vec<Atk>,
    next_id: AtkId,
}

/// In-memory storage backend.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    inner: Arc<Mutex<Inner>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a repository pre-populated with `records`.
    ///
    /// The id counter starts past the highest id present.
    pub fn with_records(records: Vec<Atk>) -> Self {
        let next_id = next_id(&records);
        Self {
            inner: Arc::new(Mutex::new(Inner { records, next_id })),
        }
    }

    /// Sets the soft-delete flag on the record matching `id` whose flag is
    /// currently `!deleted`.
    async fn set_deleted(&self, id: AtkId, deleted: bool) -> bool {
        let mut inner = self.inner.lock().await;
        match inner
            .records
            .iter_mut()
            .find(|atk| atk.id == id && atk.deleted != deleted)
        {
            Some(atk) => {
                atk.deleted = deleted;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl AtkRepository for InMemoryRepository {
    async fn list(&self) -> Result<Vec<Atk>> {
        let inner = self.inner.lock().await;
        Ok(filter_by_deleted(&inner.records, false))
    }

    async fn list_deleted(&self) -> Result<Vec<Atk>> {
        let inner = self.inner.lock().await;
        Ok(filter_by_deleted(&inner.records, true))
    }

    async fn create(&self, input: &AtkInput) -> Result<Atk> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id.max(next_id(&inner.records));
        inner.next_id = id + 1;

        let atk = input.clone().into_atk(id);
        inner.records.push(atk.clone());
        Ok(atk)
    }

    async fn update(&self, id: AtkId, input: &AtkInput) -> Result<Option<Atk>> {
        let mut inner = self.inner.lock().await;
        let Some(slot) = inner
            .records
            .iter_mut()
            .find(|atk| atk.id == id && atk.is_active())
        else {
            return Ok(None);
        };

        *slot = input.clone().into_atk(id);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: AtkId) -> Result<bool> {
        Ok(self.set_deleted(id, true).await)
    }

    async fn restore(&self, id: AtkId) -> Result<bool> {
        Ok(self.set_deleted(id, false).await)
    }

    async fn hard_delete(&self, id: AtkId) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        let before = inner.records.len();
        inner.records.retain(|atk| atk.id != id);
        Ok(inner.records.len() != before)
    }

    async fn ping(&self) -> Result<()> {
        let _inner = self.inner.lock().await;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
