use super::Error;

/// Error when an indexed access expects a row that does not exist.
#[derive(Debug)]
pub(super) struct RecordNotFound {
    pub(super) table: Box<str>,
}

impl core::fmt::Display for RecordNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record not found in `{}`", self.table)
    }
}

impl Error {
    /// Creates a record not found error.
    pub fn record_not_found(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RecordNotFound(RecordNotFound {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a record not found error.
    pub fn is_record_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordNotFound(_))
    }
}
