//! API request types for ATK operations.

use serde::{Deserialize, Serialize};

use super::types::{Atk, AtkId};

/// Request payload for creating or replacing an ATK record.
///
/// Clients may send a full record; `id` and `deleted` are ignored because
/// both are owned by the store. Missing fields fall back to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtkInput {
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub jenis: String,
    #[serde(default)]
    pub qty: i64,
}

impl AtkInput {
    pub fn new(nama: impl Into<String>, jenis: impl Into<String>, qty: i64) -> Self {
        Self {
            nama: nama.into(),
            jenis: jenis.into(),
            qty,
        }
    }

    /// Builds the active record stored under `id`.
    pub fn into_atk(self, id: AtkId) -> Atk {
        Atk {
            id,
            nama: self.nama,
            jenis: self.jenis,
            qty: self.qty,
            deleted: false,
        }
    }
}
