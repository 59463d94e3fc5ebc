//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// Constraint or input validation failure (unique code, missing field, bad transition)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation blocked by existing references to the entity
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// True for errors caused by the caller's data rather than the infrastructure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Validation(_) | Self::Conflict(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let id = Uuid::nil();
        let err = DomainError::not_found("Facility", id);
        assert_eq!(
            err.to_string(),
            format!("Entity not found: Facility with id {}", id)
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_infrastructure_errors_are_not_client_errors() {
        assert!(!DomainError::Repository("db down".into()).is_client_error());
        assert!(!DomainError::ExternalService("timeout".into()).is_client_error());
    }
}
