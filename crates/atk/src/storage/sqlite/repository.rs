//! SQLite repository implementation.
//!
//! Implements [`AtkRepository`] from `atk_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use atk_core::atk::{Atk, AtkId, AtkInput};
use atk_core::storage::{AtkRepository, RepositoryError, Result};

use super::conversions::{deleted_to_flag, row_to_atk};
use super::error::{is_duplicate_column, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The table and the soft-delete column are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::from_connection(conn).await
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::from_connection(conn).await
    }

    /// Wraps an open connection, applying the schema first.
    pub async fn from_connection(conn: Connection) -> Result<Self> {
        let added = Self::init_schema(&conn).await?;
        if added {
            tracing::info!(
                column = schema::DELETED_COLUMN,
                "Added soft-delete column to mst_atk"
            );
        }

        Ok(Self { conn })
    }

    /// Creates the table and adds the soft-delete column if it is absent.
    ///
    /// Returns whether the column had to be added. Safe to run repeatedly.
    async fn init_schema(conn: &Connection) -> Result<bool> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLE).map_err(wrap_err)?;

            let columns = {
                let mut stmt = conn.prepare(schema::SELECT_COLUMNS).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([], |row| row.get::<_, String>(0))
                    .map_err(wrap_err)?;

                let mut columns = Vec::new();
                for row_result in rows {
                    columns.push(row_result.map_err(wrap_err)?);
                }
                columns
            };

            if !schema::needs_deleted_column(&columns) {
                return Ok(false);
            }

            match conn.execute(schema::ADD_DELETED_COLUMN, []) {
                Ok(_) => Ok(true),
                Err(e) if is_duplicate_column(&e) => Ok(false),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    async fn select_by_deleted(&self, deleted: bool) -> Result<Vec<Atk>> {
        let flag = deleted_to_flag(deleted);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BY_DELETED).map_err(wrap_err)?;
                let rows = stmt.query_map([flag], row_to_atk).map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    /// Moves the flag of record `id` to `deleted` if it currently holds the opposite value.
    async fn set_deleted(&self, id: AtkId, deleted: bool) -> Result<bool> {
        let to = deleted_to_flag(deleted);
        let from = deleted_to_flag(!deleted);

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::SET_DELETED, rusqlite::params![id, to, from])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl AtkRepository for SqliteRepository {
    async fn list(&self) -> Result<Vec<Atk>> {
        self.select_by_deleted(false).await
    }

    async fn list_deleted(&self) -> Result<Vec<Atk>> {
        self.select_by_deleted(true).await
    }

    async fn create(&self, input: &AtkInput) -> Result<Atk> {
        let input = input.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ATK,
                    rusqlite::params![input.nama, input.jenis, input.qty],
                )
                .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(input.into_atk(id))
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update(&self, id: AtkId, input: &AtkInput) -> Result<Option<Atk>> {
        let input = input.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ATK,
                        rusqlite::params![id, input.nama, input.jenis, input.qty],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Ok(None)
                } else {
                    Ok(Some(input.into_atk(id)))
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete(&self, id: AtkId) -> Result<bool> {
        self.set_deleted(id, true).await
    }

    async fn restore(&self, id: AtkId) -> Result<bool> {
        self.set_deleted(id, false).await
    }

    async fn hard_delete(&self, id: AtkId) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::HARD_DELETE_ATK, [id])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |_| Ok(()))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
