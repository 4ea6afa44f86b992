//! Email format verdicts.

use validator::ValidateEmail;

use crate::error::CollaboratorError;

/// Capability to judge email format validity.
///
/// Implementations range from a syntactic check to a remote
/// verification service; the signup route only consumes the verdict.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is a well-formed address.
    ///
    /// # Errors
    ///
    /// Returns `Err` when no verdict could be produced at all.
    fn is_valid(
        &self,
        email: &str,
    ) -> std::result::Result<bool, CollaboratorError>;
}

/// Syntactic email validation, RFC 5322 as implemented by `validator`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailFormat;

impl EmailValidator for EmailFormat {
    fn is_valid(
        &self,
        email: &str,
    ) -> std::result::Result<bool, CollaboratorError> {
        Ok(email.validate_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format_verdicts() {
        let validator = EmailFormat;

        assert!(validator.is_valid("email_valido@email.com").unwrap());
        assert!(!validator.is_valid("email_invalido").unwrap());
        assert!(!validator.is_valid("a@b@c.com").unwrap());
        assert!(!validator.is_valid("").unwrap());
    }
}
