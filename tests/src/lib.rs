mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

pub use std_util::*;

use ormic::{Db, Model, Result, Type};
use ormic_driver_sqlite::Sqlite;

/// Installs a `tracing` subscriber honoring `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A `User { id: I64, name: String }` model stored in `users`.
pub fn user_model() -> Model {
    Model::builder("User")
        .table_name("users")
        .field("id", Type::I64)
        .field("name", Type::String)
        .build()
        .unwrap()
        .into()
}

/// Connects `builder` to a private in-memory SQLite database through a
/// recording driver.
pub async fn connect(builder: &ormic::db::Builder) -> Result<(Db, ExecLog)> {
    init_tracing();

    let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
    let log = ExecLog::new(driver.ops_log_handle());
    let db = builder.connect_with(&driver).await?;
    Ok((db, log))
}
