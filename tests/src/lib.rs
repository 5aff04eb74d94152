pub use exec_log::{Exec, ExecLog};

mod logging_driver;
pub use logging_driver::LoggingDriver;

pub mod models;

pub use std_util::*;

use rowmap::{registry, ModelRegistry};
use rowmap_driver_sqlite::Sqlite;

/// Installs a `tracing` subscriber filtered by `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A registry over a fresh in-memory database, with every registered table
/// created. The returned log only holds statements issued after setup.
pub async fn setup(builder: &mut registry::Builder) -> (ModelRegistry, ExecLog) {
    init_tracing();

    let driver = LoggingDriver::new(Sqlite::in_memory().unwrap());
    let log = driver.exec_log();

    let db = builder.build(driver).unwrap();
    db.create_tables().await.unwrap();
    log.clear();

    (db, log)
}
