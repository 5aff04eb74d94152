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
mod predicate;
mod statement;
mod value;

use crate::{
    stmt::{ColumnDef, Statement},
    Fragment,
};

use rowmap_core::stmt::Value;

/// Serialize a statement to a SQL string
///
/// Identifiers are quoted with backticks and every value is emitted as a `?`
/// placeholder, with the value itself pushed onto the caller's [`Params`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer;

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = self.render(stmt, params);
        ret.push(';');
        ret
    }

    /// Serializes a single predicate fragment, without a terminator.
    pub fn serialize_fragment(&self, fragment: &Fragment, params: &mut impl Params) -> String {
        self.render(fragment, params)
    }

    /// Serializes the column list of a CREATE TABLE statement.
    pub fn serialize_column_defs(&self, columns: &[ColumnDef]) -> String {
        let mut params = Vec::<Value>::new();
        self.render(Comma(columns), &mut params)
    }

    fn render<T: Params>(&self, node: impl ToSql, params: &mut T) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        node.to_sql(&mut fmt);
        ret
    }
}
