use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// "Record absent" is not an error for the soft-delete operations: those
/// report it through their return value. `NotFound` exists so handlers can
/// turn such an outcome into a typed error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Builds a `NotFound` error for an ATK record.
    pub fn atk_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Atk",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
