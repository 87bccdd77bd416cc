//! Domain Layer - Core Entity Trait and Errors
//!
//! Every stored record that is addressed by an identifier implements [`Entity`].

use thiserror::Error;

/// Core trait for entities kept in a stored array
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type NotesResult<T> = Result<T, NotesError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotesError {
    /// Rejected user input; nothing was written.
    #[error("{0}")]
    Validation(String),
    /// Storage gateway or browser API failure.
    #[error("storage error: {0}")]
    Storage(String),
    /// Malformed imported data.
    #[error("{0}")]
    Parse(String),
}

impl NotesError {
    pub fn validation(msg: impl Into<String>) -> Self {
        NotesError::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        NotesError::Storage(msg.into())
    }

    /// Errors the user should see in a dialog
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, NotesError::Storage(_))
    }
}

impl From<serde_json::Error> for NotesError {
    fn from(err: serde_json::Error) -> Self {
        NotesError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_stay_silent() {
        assert!(!NotesError::storage("quota").is_user_facing());
        assert!(NotesError::validation("empty").is_user_facing());
        assert!(NotesError::Parse("bad".into()).is_user_facing());
    }

    #[test]
    fn test_json_error_becomes_parse() {
        let err: NotesError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, NotesError::Parse(_)));
    }
}
