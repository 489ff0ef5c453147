use super::Error;

/// Error when a statement is misconfigured.
///
/// This occurs when:
/// - A statement references an unknown record type or field
/// - A builder is executed without a required clause (e.g. a CREATE TABLE
///   with no table name)
/// - A result mode is incompatible with the statement shape (e.g. asking for
///   record instances after selecting a field subset)
///
/// These errors are caught at build time, before the statement touches
/// storage.
#[derive(Debug)]
pub(super) struct InvalidStatement {
    pub(super) message: Box<str>,
}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidStatement(_))
    }
}
