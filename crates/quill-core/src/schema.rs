mod field;
pub use field::{FieldDescriptor, ForeignKey};

mod record_type;
pub use record_type::RecordType;

mod registry;
pub use registry::Registry;

pub use crate::stmt::Type;

/// Name of the implicit auto-increment primary key field carried by every
/// record type.
pub const PK: &str = "pk";
