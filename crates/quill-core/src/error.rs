mod driver;
mod integrity_violation;
mod invalid_connection_url;
mod invalid_schema;
mod invalid_statement;
mod missing_required_field;
mod record_not_found;
mod type_mismatch;
mod unsupported_operation;

use driver::DriverError;
use integrity_violation::IntegrityViolation;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_schema::InvalidSchema;
use invalid_statement::InvalidStatement;
use missing_required_field::MissingRequiredField;
use record_not_found::RecordNotFound;
use type_mismatch::TypeMismatch;
use unsupported_operation::UnsupportedOperation;

/// An error that can occur in quill.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Driver(DriverError),
    IntegrityViolation(IntegrityViolation),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidSchema(InvalidSchema),
    InvalidStatement(InvalidStatement),
    MissingRequiredField(MissingRequiredField),
    RecordNotFound(RecordNotFound),
    TypeMismatch(TypeMismatch),
    UnsupportedOperation(UnsupportedOperation),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => err.source(),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use core::fmt::Display;

        match self.kind() {
            ErrorKind::Driver(err) => Display::fmt(err, f),
            ErrorKind::IntegrityViolation(err) => Display::fmt(err, f),
            ErrorKind::InvalidConnectionUrl(err) => Display::fmt(err, f),
            ErrorKind::InvalidSchema(err) => Display::fmt(err, f),
            ErrorKind::InvalidStatement(err) => Display::fmt(err, f),
            ErrorKind::MissingRequiredField(err) => Display::fmt(err, f),
            ErrorKind::RecordNotFound(err) => Display::fmt(err, f),
            ErrorKind::TypeMismatch(err) => Display::fmt(err, f),
            ErrorKind::UnsupportedOperation(err) => Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}
