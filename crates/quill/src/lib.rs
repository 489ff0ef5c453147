pub mod db;
pub use db::Db;

pub mod record;
pub use record::Record;

pub mod stmt;
pub use stmt::{CreateTable, Delete, DropTable, Insert, Select, Update};

pub use quill_core::{
    schema::{FieldDescriptor, ForeignKey, RecordType, Registry},
    stmt::{Direction, Expr, InItem, Type, Value},
    Error, Result,
};
pub use quill_driver_sqlite::Sqlite;
