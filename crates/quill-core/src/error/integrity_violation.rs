use super::Error;

/// Error when the storage engine reports a constraint failure.
///
/// Uniqueness and foreign-key violations surface here, passed through to the
/// caller with the statement that triggered them. Nothing is retried.
#[derive(Debug)]
pub(super) struct IntegrityViolation {
    pub(super) statement: Box<str>,
    pub(super) message: Box<str>,
}

impl core::fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "integrity violation: {}; statement={}",
            self.message, self.statement
        )
    }
}

impl Error {
    /// Creates an integrity violation error.
    pub fn integrity_violation(
        statement: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::IntegrityViolation(IntegrityViolation {
            statement: statement.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an integrity violation error.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IntegrityViolation(_))
    }
}
