use super::{predicate::Filter, Comma, Delimited, Formatter, Ident, Params, ToSql};

use crate::stmt::{
    Assignment, CreateTable, Delete, DropTable, Insert, Limit, Returning, Select, Statement,
    Update,
};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let name = Ident(&self.name);
        let columns = &self.columns;

        fmt!(f, "CREATE TABLE " if_not_exists name " (" columns ")");
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let filter = Filter(&self.filter);

        fmt!(f, "DELETE FROM " table filter);
    }
}

impl ToSql for &DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let name = Ident(&self.name);

        fmt!(f, "DROP TABLE " if_exists name);
    }
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);

        if self.columns.is_empty() {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let returning = &self.returning;
        let table = Ident(&self.table);
        let filter = Filter(&self.filter);

        fmt!(f, "SELECT " returning " FROM " table filter);

        if !self.order_by.is_empty() {
            let order_by = Delimited(&self.order_by, ",");
            fmt!(f, " ORDER BY " order_by);
        }

        if let Some(limit) = &self.limit {
            fmt!(f, " " limit);
        }
    }
}

impl ToSql for &Returning {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Returning::Star => fmt!(f, "*"),
            Returning::Raw(raw) => fmt!(f, raw),
            Returning::Columns(columns) => {
                let columns = Comma(columns.iter().map(Ident));
                fmt!(f, columns);
            }
            Returning::Count(expr) => {
                let expr = expr.as_deref().unwrap_or("*");
                let alias = Ident("N");
                fmt!(f, "COUNT(" expr ") AS " alias);
            }
        }
    }
}

impl ToSql for &Limit {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let limit = self.limit;
        let offset = self.offset;

        if offset > 0 {
            fmt!(f, "LIMIT " offset ", " limit);
        } else {
            fmt!(f, "LIMIT " limit);
        }
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(&self.assignments);
        let filter = Filter(&self.filter);

        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToSql for &Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(&self.column);
        let value = &self.value;

        fmt!(f, column "=" value);
    }
}
