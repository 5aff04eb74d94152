mod ty;

mod value;
pub(crate) use value::Value;

use rowmap_core::{
    async_trait,
    driver::{Driver, ExecResult, FieldInitError, Row},
    err,
    schema::{Field, ModelMetadata},
    stmt, Error, Result,
};
use rowmap_sql::{self as sql, stmt::ColumnDef};
use rusqlite::{types::Value as SqlValue, Connection};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use url::Url;

/// A SQLite database driven through a single connection.
///
/// Statements run on tokio's blocking pool so that async tasks never wait on
/// SQLite I/O. Cloning the driver shares the connection.
#[derive(Debug, Clone)]
pub struct Sqlite {
    target: Target,
    connection: Arc<Mutex<Connection>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Opens a database from a connection URL: `sqlite::memory:` or
    /// `sqlite:/path/to/file.db`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )))
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::with_connection(Target::InMemory, connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).map_err(Error::driver)?;
        Ok(Self::with_connection(Target::File(path), connection))
    }

    fn with_connection(target: Target, connection: Connection) -> Self {
        Self {
            target,
            connection: Arc::new(Mutex::new(connection)),
        }
    }

    /// The connection URL of this database.
    pub fn url(&self) -> String {
        match &self.target {
            Target::InMemory => "sqlite::memory:".to_string(),
            Target::File(path) => format!("sqlite:{}", path.display()),
        }
    }

    /// Runs `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let connection = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let mut connection = connection
                .lock()
                .map_err(|_| err!("sqlite connection lock poisoned"))?;
            f(&mut connection)
        })
        .await
        .map_err(Error::driver)?
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn init_field(&self, field: &mut Field) -> std::result::Result<(), FieldInitError> {
        ty::init_field(field)
    }

    fn generate_create_table(&self, model: &ModelMetadata) -> Result<String> {
        let columns: Vec<_> = model
            .fields
            .iter()
            .map(|field| ColumnDef {
                name: field.name.clone(),
                ty: field.storage_ty.clone(),
                primary_key: model.primary_key == Some(field.index),
                auto_increment: field.auto_increment,
            })
            .collect();

        Ok(sql::Serializer::new().serialize_column_defs(&columns))
    }

    async fn execute(&self, sql: &str, params: &[stmt::Value]) -> Result<ExecResult> {
        tracing::trace!(sql, params = params.len(), "sqlite execute");

        let sql = sql.to_string();
        let params = to_sql_params(params);

        self.with_conn(move |connection| {
            let mut stmt = connection.prepare_cached(&sql).map_err(Error::driver)?;
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver)?;
            drop(stmt);

            let is_insert = sql
                .trim_start()
                .get(..6)
                .is_some_and(|head| head.eq_ignore_ascii_case("INSERT"));

            Ok(ExecResult {
                affected_rows: count as u64,
                insert_id: (is_insert && count > 0).then(|| connection.last_insert_rowid()),
            })
        })
        .await
    }

    async fn query(&self, sql: &str, params: &[stmt::Value]) -> Result<Vec<Row>> {
        tracing::trace!(sql, params = params.len(), "sqlite query");

        let sql = sql.to_string();
        let params = to_sql_params(params);

        self.with_conn(move |connection| {
            let mut stmt = connection.prepare_cached(&sql).map_err(Error::driver)?;
            let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

            let mut rows = stmt
                .query(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver)?;

            let mut ret = vec![];

            while let Some(row) = rows.next().map_err(Error::driver)? {
                let mut item = Row::new();

                for (index, column) in columns.iter().enumerate() {
                    let value: SqlValue = row.get(index).map_err(Error::driver)?;
                    item.insert(column.clone(), Value::from_sql(value).into_inner());
                }

                ret.push(item);
            }

            Ok(ret)
        })
        .await
    }
}

fn to_sql_params(params: &[stmt::Value]) -> Vec<Value> {
    params.iter().cloned().map(Value::from).collect()
}
