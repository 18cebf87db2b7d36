//! Registration-specific error types.
//!
//! Every failure of the registration workflow maps to exactly one of these
//! variants. Rule violations and infrastructure failures are kept apart so a
//! caller can retry persistence without re-running the screening stages.

use thiserror::Error;

use crate::ports::RepositoryError;

/// Errors raised by the registration workflow.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// A required identity field was blank or whitespace-only.
    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },

    /// The candidate failed the qualification gate.
    #[error("speaker does not meet the qualification requirements")]
    NotQualified,

    /// The candidate proposed no sessions to present.
    #[error("speaker has no sessions to present")]
    NoSessions,

    /// The speaker store failed after every screening stage had passed.
    #[error("failed to save speaker registration")]
    Persistence(#[from] RepositoryError),
}

impl RegistrationError {
    /// Creates a missing-field error.
    pub fn missing_field(field: &'static str) -> Self {
        RegistrationError::MissingField { field }
    }

    /// Returns true when the failure is a business-rule rejection rather
    /// than an infrastructure fault. Rule rejections are terminal for the
    /// attempt; only a persistence failure is worth retrying.
    pub fn is_rule_violation(&self) -> bool {
        !matches!(self, RegistrationError::Persistence(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn missing_field_names_the_field() {
        let err = RegistrationError::missing_field("email");
        assert_eq!(format!("{}", err), "required field 'email' is missing");
    }

    #[test]
    fn rule_violations_are_classified_as_such() {
        assert!(RegistrationError::missing_field("first_name").is_rule_violation());
        assert!(RegistrationError::NotQualified.is_rule_violation());
        assert!(RegistrationError::NoSessions.is_rule_violation());
    }

    #[test]
    fn persistence_failure_is_not_a_rule_violation() {
        let err = RegistrationError::from(RepositoryError::Unavailable("down".to_string()));
        assert!(!err.is_rule_violation());
    }

    #[test]
    fn persistence_failure_carries_its_source() {
        let err = RegistrationError::from(RepositoryError::IdentifierNotAllocated);
        let source = err.source().expect("persistence error must keep its cause");
        assert_eq!(
            source.to_string(),
            "speaker store did not allocate an identifier"
        );
    }
}
