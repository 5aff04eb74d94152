use super::{Formatter, Ident, Params, ToSql};

use crate::stmt::ColumnDef;

impl ToSql for &ColumnDef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);
        let ty = &self.ty;

        fmt!(f, name " " ty);

        if self.primary_key {
            fmt!(f, " PRIMARY KEY");
        }

        if self.auto_increment {
            fmt!(f, " AUTOINCREMENT");
        }
    }
}
