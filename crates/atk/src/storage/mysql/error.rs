//! MySQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `atk_core::storage`.

use atk_core::storage::RepositoryError;

/// SQLSTATE reported by MySQL for `ER_DUP_FIELDNAME` (1060).
const DUPLICATE_COLUMN_SQLSTATE: &str = "42S21";

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - I/O, TLS, configuration and pool exhaustion → `RepositoryError::ConnectionFailed`
/// - Decoding and missing columns → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::InvalidData(err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Returns true when `err` reports that the column being added already exists.
pub fn is_duplicate_column(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == DUPLICATE_COLUMN_SQLSTATE)
}
