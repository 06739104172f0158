//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// Name of the soft-delete flag column added by the migration.
pub const DELETED_COLUMN: &str = "id_deleted";

/// SQL statement to create the table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a hard-deleted row.
pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS mst_atk (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nama TEXT,
    jenis TEXT,
    qty INTEGER,
    id_deleted INTEGER DEFAULT 0
);
"#;

/// Lists the column names of the table.
pub const SELECT_COLUMNS: &str = r#"
SELECT name FROM pragma_table_info('mst_atk')
"#;

/// Additive migration for tables created before soft delete existed.
pub const ADD_DELETED_COLUMN: &str = r#"
ALTER TABLE mst_atk ADD COLUMN id_deleted INTEGER DEFAULT 0
"#;

/// Rows whose flag is NULL, as left by older writers, count as active in
/// every statement below.
pub const SELECT_BY_DELETED: &str = r#"
SELECT id, nama, jenis, qty, id_deleted
FROM mst_atk
WHERE COALESCE(id_deleted, 0) = ?1
ORDER BY id ASC
"#;

pub const INSERT_ATK: &str = r#"
INSERT INTO mst_atk (nama, jenis, qty, id_deleted)
VALUES (?1, ?2, ?3, 0)
"#;

pub const UPDATE_ATK: &str = r#"
UPDATE mst_atk
SET nama = ?2, jenis = ?3, qty = ?4
WHERE id = ?1 AND COALESCE(id_deleted, 0) = 0
"#;

/// Flips the flag from `?3` to `?2`. Used for both soft delete and restore.
pub const SET_DELETED: &str = r#"
UPDATE mst_atk
SET id_deleted = ?2
WHERE id = ?1 AND COALESCE(id_deleted, 0) = ?3
"#;

pub const HARD_DELETE_ATK: &str = r#"
DELETE FROM mst_atk
WHERE id = ?1
"#;

/// Liveness query; touches no table.
pub const PING: &str = "SELECT 1";

/// Returns true when `columns` lacks the soft-delete flag.
pub fn needs_deleted_column(columns: &[String]) -> bool {
    !columns
        .iter()
        .any(|column| column.eq_ignore_ascii_case(DELETED_COLUMN))
}
