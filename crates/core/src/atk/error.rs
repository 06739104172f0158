use thiserror::Error;

/// Errors raised while validating an incoming ATK request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("qty must not be negative")]
    NegativeQty,
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::NegativeQty.to_string(),
            "qty must not be negative"
        );
        assert_eq!(
            ValidationError::InvalidId("abc".to_string()).to_string(),
            "invalid id: abc"
        );
    }
}
