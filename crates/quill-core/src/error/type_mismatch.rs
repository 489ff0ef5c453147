use super::Error;

/// Error when a value does not match a field's declared type.
///
/// Raised at expression-construction or record-construction time; values are
/// never silently coerced.
#[derive(Debug)]
pub(super) struct TypeMismatch {
    pub(super) field: Box<str>,
    pub(super) expected: &'static str,
    pub(super) actual: &'static str,
}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: field `{}` is {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch {
            field: field.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
