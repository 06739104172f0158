//! MySQL repository implementation.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use atk_core::atk::{Atk, AtkId, AtkInput};
use atk_core::storage::{AtkRepository, RepositoryError, Result};

use super::error::{is_duplicate_column, map_sqlx_error};
use super::schema;

/// Row shape of `SELECT id, nama, jenis, qty, id_deleted`.
///
/// Columns created by older deployments carry no NOT NULL constraints.
type AtkRow = (i64, Option<String>, Option<String>, Option<i64>, Option<i64>);

fn row_to_atk((id, nama, jenis, qty, id_deleted): AtkRow) -> Atk {
    Atk {
        id,
        nama: nama.unwrap_or_default(),
        jenis: jenis.unwrap_or_default(),
        qty: qty.unwrap_or_default(),
        deleted: id_deleted.unwrap_or(0) != 0,
    }
}

/// MySQL-backed repository implementation.
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Connects to `url` (a `mysql://` URL) and applies the schema.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .connect(url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self { pool };
        if repo.init_schema().await? {
            tracing::info!("Added soft-delete column to mst_atk");
        }

        Ok(repo)
    }

    /// Creates the table and adds the soft-delete column if it is absent.
    ///
    /// Returns whether the column had to be added. A duplicate-column error
    /// from a concurrent migration counts as already applied.
    async fn init_schema(&self) -> Result<bool> {
        sqlx::query(schema::CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let (present,): (i64,) = sqlx::query_as(schema::COUNT_DELETED_COLUMN)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        if present > 0 {
            return Ok(false);
        }

        match sqlx::query(schema::ADD_DELETED_COLUMN)
            .execute(&self.pool)
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_column(&e) => Ok(false),
            Err(e) => Err(map_sqlx_error(e)),
        }
    }

    async fn select_by_deleted(&self, deleted: bool) -> Result<Vec<Atk>> {
        let rows = sqlx::query_as::<_, AtkRow>(schema::SELECT_BY_DELETED)
            .bind(i32::from(deleted))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_atk).collect())
    }

    async fn set_deleted(&self, id: AtkId, deleted: bool) -> Result<bool> {
        let result = sqlx::query(schema::SET_DELETED)
            .bind(i32::from(deleted))
            .bind(id)
            .bind(i32::from(!deleted))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl AtkRepository for MySqlRepository {
    async fn list(&self) -> Result<Vec<Atk>> {
        self.select_by_deleted(false).await
    }

    async fn list_deleted(&self) -> Result<Vec<Atk>> {
        self.select_by_deleted(true).await
    }

    async fn create(&self, input: &AtkInput) -> Result<Atk> {
        let result = sqlx::query(schema::INSERT_ATK)
            .bind(&input.nama)
            .bind(&input.jenis)
            .bind(input.qty)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let id = AtkId::try_from(result.last_insert_id())
            .map_err(|e| RepositoryError::InvalidData(format!("insert id out of range: {e}")))?;

        Ok(input.clone().into_atk(id))
    }

    async fn update(&self, id: AtkId, input: &AtkInput) -> Result<Option<Atk>> {
        let result = sqlx::query(schema::UPDATE_ATK)
            .bind(&input.nama)
            .bind(&input.jenis)
            .bind(input.qty)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        // MySQL may count changed rows rather than matched rows, so an update
        // that rewrites identical values reports zero.
        if result.rows_affected() == 0 {
            let (matched,): (i64,) = sqlx::query_as(schema::COUNT_ACTIVE_BY_ID)
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
            if matched == 0 {
                return Ok(None);
            }
        }

        Ok(Some(input.clone().into_atk(id)))
    }

    async fn delete(&self, id: AtkId) -> Result<bool> {
        self.set_deleted(id, true).await
    }

    async fn restore(&self, id: AtkId) -> Result<bool> {
        self.set_deleted(id, false).await
    }

    async fn hard_delete(&self, id: AtkId) -> Result<bool> {
        let result = sqlx::query(schema::HARD_DELETE_ATK)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query(schema::PING)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mysql"
    }
}
