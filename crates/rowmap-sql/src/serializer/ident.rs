use super::{Formatter, Params, ToSql};

/// A backtick-quoted identifier. Embedded backticks are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let ident = self.0.as_ref();

        f.dst.push('`');
        for c in ident.chars() {
            if c == '`' {
                f.dst.push('`');
            }
            f.dst.push(c);
        }
        f.dst.push('`');
    }
}
