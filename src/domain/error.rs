use thiserror::Error;

/// Domain-level errors for malformed shape field values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid decimal: {0}")]
    InvalidAmount(String),

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid URI: {0}")]
    InvalidUri(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            DomainError::InvalidAmount("1.2.3".to_string()).to_string(),
            "Invalid decimal: 1.2.3"
        );
        assert_eq!(DomainError::Overflow.to_string(), "Arithmetic overflow");
        assert_eq!(
            DomainError::InvalidUri("not a uri".to_string()).to_string(),
            "Invalid URI: not a uri"
        );
    }

    #[test]
    fn error_is_cloneable() {
        let err = DomainError::Overflow;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn error_comparison_works() {
        assert_eq!(
            DomainError::InvalidUri("x".to_string()),
            DomainError::InvalidUri("x".to_string())
        );
        assert_ne!(DomainError::Overflow, DomainError::InvalidUri("x".to_string()));
    }
}
