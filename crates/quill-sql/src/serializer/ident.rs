use super::{Formatter, Params, ToSql};

/// A table or column identifier, lower-cased on output.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let ident = self.0.as_ref();

        if ident.bytes().any(|b| b.is_ascii_uppercase()) {
            f.dst.push_str(&ident.to_lowercase());
        } else {
            f.dst.push_str(ident);
        }
    }
}
