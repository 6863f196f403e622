//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown ticket category: {0}")]
    UnknownCategory(String),

    #[error("A ticket category must be selected")]
    MissingCategory,

    #[error("A ticket description is required")]
    EmptyDescription,

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let error = DomainError::UnknownCategory("billing".to_string());
        assert_eq!(error.to_string(), "Unknown ticket category: billing");
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            from: "idle",
            to: "succeeded",
        };
        assert_eq!(error.to_string(), "Invalid state transition: idle -> succeeded");
    }
}
