//! MySQL schema definitions and SQL query constants.

pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS mst_atk (
    id INT AUTO_INCREMENT PRIMARY KEY,
    nama VARCHAR(255),
    jenis VARCHAR(255),
    qty INT,
    id_deleted INT DEFAULT 0
)
"#;

/// Counts the soft-delete column in the current database's `mst_atk` table.
pub const COUNT_DELETED_COLUMN: &str = r#"
SELECT COUNT(*)
FROM information_schema.COLUMNS
WHERE TABLE_SCHEMA = DATABASE()
  AND TABLE_NAME = 'mst_atk'
  AND COLUMN_NAME = 'id_deleted'
"#;

/// Additive migration for tables created before soft delete existed.
pub const ADD_DELETED_COLUMN: &str = r#"
ALTER TABLE mst_atk ADD COLUMN id_deleted INT DEFAULT 0
"#;

pub const SELECT_BY_DELETED: &str = r#"
SELECT id, nama, jenis, qty, id_deleted
FROM mst_atk
WHERE COALESCE(id_deleted, 0) = ?
ORDER BY id ASC
"#;

pub const COUNT_ACTIVE_BY_ID: &str = r#"
SELECT COUNT(*)
FROM mst_atk
WHERE id = ? AND COALESCE(id_deleted, 0) = 0
"#;

pub const INSERT_ATK: &str = r#"
INSERT INTO mst_atk (nama, jenis, qty, id_deleted)
VALUES (?, ?, ?, 0)
"#;

pub const UPDATE_ATK: &str = r#"
UPDATE mst_atk
SET nama = ?, jenis = ?, qty = ?
WHERE id = ? AND COALESCE(id_deleted, 0) = 0
"#;

pub const SET_DELETED: &str = r#"
UPDATE mst_atk
SET id_deleted = ?
WHERE id = ? AND COALESCE(id_deleted, 0) = ?
"#;

pub const HARD_DELETE_ATK: &str = r#"
DELETE FROM mst_atk
WHERE id = ?
"#;

/// Liveness query; touches no table.
pub const PING: &str = "SELECT 1";
