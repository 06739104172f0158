use super::error::ValidationError;
use super::requests::AtkInput;
use super::types::{Atk, AtkId};

/// Validates a create or update request.
///
/// The only rule is a non-negative quantity.
pub fn validate_input(input: &AtkInput) -> Result<(), ValidationError> {
    if input.qty < 0 {
        return Err(ValidationError::NegativeQty);
    }
    Ok(())
}

/// Returns the records whose soft-delete flag equals `deleted`, in storage order.
pub fn filter_by_deleted(records: &[Atk], deleted: bool) -> Vec<Atk> {
    records
        .iter()
        .filter(|atk| atk.deleted == deleted)
        .cloned()
        .collect()
}

/// Returns the id following the highest id in `records`, starting at 1.
pub fn next_id(records: &[Atk]) -> AtkId {
    records.iter().map(|atk| atk.id).max().unwrap_or(0) + 1
}
