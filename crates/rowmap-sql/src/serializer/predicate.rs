use super::{Delimited, Formatter, Ident, Params, ToSql};

use crate::{Fragment, Predicate};

/// ` WHERE <predicate>`, or nothing for an empty predicate.
pub(super) struct Filter<'a>(pub(super) &'a Predicate);

impl ToSql for &Fragment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Fragment::Eq { column, value } => {
                let column = Ident(column);
                fmt!(f, column "=" value);
            }
            Fragment::In { column, values } => {
                let column = Ident(column);
                let values = Delimited(values, ",");
                fmt!(f, column " IN (" values ")");
            }
        }
    }
}

impl ToSql for &Predicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        Delimited(self.fragments(), " AND ").to_sql(f);
    }
}

impl ToSql for Filter<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if !self.0.is_empty() {
            let predicate = self.0;
            fmt!(f, " WHERE " predicate);
        }
    }
}
