use thiserror::Error;

/// Core domain errors
///
/// One variant per error kind the service contract distinguishes, so
/// callers branch on variants rather than message text. Display renders
/// the bare message: the fixed validation strings and any
/// repository-supplied message reach callers unmodified.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A scalar argument failed a service precondition.
    #[error("{message}")]
    InvalidArgument { message: String },

    /// A required object argument was not supplied at all.
    #[error("{message}")]
    MissingArgument { message: String },

    /// A lookup found no matching record.
    #[error("{message}")]
    NotFound { message: String },

    /// Failure reported by a repository implementation; carried through
    /// without inspection.
    #[error("{message}")]
    Repository { message: String },
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::MissingArgument {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = DomainError::invalid_argument("Id must be greater than zero");
        assert_eq!(error.to_string(), "Id must be greater than zero");
    }

    #[test]
    fn test_not_found_display() {
        let error = DomainError::not_found("User not found");
        assert_eq!(error.to_string(), "User not found");
    }

    #[test]
    fn test_repository_message_untouched() {
        let error = DomainError::repository("connection reset by peer");
        assert_eq!(error.to_string(), "connection reset by peer");
    }
}
