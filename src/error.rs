//! Per-container error taxonomy.
//!
//! Every error here is scoped to exactly one container: the registry logs
//! it, records it, and moves on to the next container. Nothing in this
//! crate treats any of these as fatal to the page.

use thiserror::Error;

/// Why one container was rejected during discovery.
///
/// Disabled widgets and configs without a runnable quiz are not errors
/// and never appear here; they are quietly skipped.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The container declared no identifier.
    #[error("container has no instance id")]
    MissingId,

    /// Another container already claimed this identifier.
    #[error("duplicate instance id `{0}`")]
    DuplicateId(String),

    /// The container carries no config payload.
    #[error("container `{0}` has no config payload")]
    MissingConfig(String),

    /// The payload was present but not parseable as a widget config.
    #[error("container `{0}`: invalid config payload")]
    InvalidConfig(String, #[source] serde_json::Error),
}

impl ContainerError {
    /// True for identity problems (missing or duplicate id), false for
    /// config problems.
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::MissingId | Self::DuplicateId(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContainerError::DuplicateId("quiz-1".into()).to_string(),
            "duplicate instance id `quiz-1`"
        );
        assert_eq!(
            ContainerError::MissingId.to_string(),
            "container has no instance id"
        );
    }

    #[test]
    fn test_identity_classification() {
        assert!(ContainerError::MissingId.is_identity());
        assert!(ContainerError::DuplicateId("a".into()).is_identity());
        assert!(!ContainerError::MissingConfig("a".into()).is_identity());
    }
}
