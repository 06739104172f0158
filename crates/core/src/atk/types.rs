use serde::{Deserialize, Serialize};

/// Identifier of an ATK record, assigned by the store on creation.
pub type AtkId = i64;

/// An office-supply inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atk {
    pub id: AtkId,
    /// Display name.
    pub nama: String,
    /// Category label.
    pub jenis: String,
    pub qty: i64,
    /// Soft-delete flag. Deleted records are hidden from normal listings.
    #[serde(default)]
    pub deleted: bool,
}

impl Atk {
    /// Creates an active record.
    pub fn new(id: AtkId, nama: impl Into<String>, jenis: impl Into<String>, qty: i64) -> Self {
        Self {
            id,
            nama: nama.into(),
            jenis: jenis.into(),
            qty,
            deleted: false,
        }
    }

    /// Returns true while the record is visible to normal listings.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}
