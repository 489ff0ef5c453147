#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod expr;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string.
///
/// Serialization is a pure function of the statement tree: no state outside
/// the tree affects the output. Identifiers are lower-cased on the way out;
/// INSERT and scalar UPDATE values are pushed into `params` and replaced by
/// positional placeholders, everything else renders as literal text.
#[derive(Debug)]
pub struct Serializer {
    _private: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// The SQLite dialect serializer.
    pub fn sqlite() -> Self {
        Self { _private: () }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}
