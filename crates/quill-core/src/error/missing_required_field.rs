use super::Error;

/// Error when a record is constructed without a value for a required field.
#[derive(Debug)]
pub(super) struct MissingRequiredField {
    pub(super) record_type: Box<str>,
    pub(super) field: Box<str>,
}

impl core::fmt::Display for MissingRequiredField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing required field: `{}` has no value for `{}`",
            self.record_type, self.field
        )
    }
}

impl Error {
    /// Creates a missing required field error.
    pub fn missing_required_field(
        record_type: impl Into<String>,
        field: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MissingRequiredField(
            MissingRequiredField {
                record_type: record_type.into().into(),
                field: field.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing required field error.
    pub fn is_missing_required_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingRequiredField(_))
    }
}
