use super::Error;

/// Error reported by the storage engine for anything other than a
/// constraint failure.
#[derive(Debug)]
pub(super) struct DriverError {
    pub(super) source: anyhow::Error,
}

impl DriverError {
    pub(super) fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "driver operation failed: {}", self.source)
    }
}

impl Error {
    /// Creates a driver error from the storage engine's error type.
    pub fn driver(source: impl Into<anyhow::Error>) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            source: source.into(),
        }))
    }

    /// Returns `true` if this error is a driver error.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }
}
