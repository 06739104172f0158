//! Row conversions for the SQLite backend.

use atk_core::atk::Atk;

/// Maps a `SELECT id, nama, jenis, qty, id_deleted` row to an [`Atk`].
///
/// Columns created without constraints may hold NULL; those read as empty
/// text, zero quantity and an active flag.
pub fn row_to_atk(row: &rusqlite::Row<'_>) -> rusqlite::Result<Atk> {
    Ok(Atk {
        id: row.get(0)?,
        nama: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        jenis: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        qty: row.get::<_, Option<i64>>(3)?.unwrap_or_default(),
        deleted: flag_to_deleted(row.get::<_, Option<i64>>(4)?),
    })
}

/// Stored representation of the soft-delete flag.
pub fn deleted_to_flag(deleted: bool) -> i64 {
    i64::from(deleted)
}

pub fn flag_to_deleted(flag: Option<i64>) -> bool {
    flag.unwrap_or(0) != 0
}
