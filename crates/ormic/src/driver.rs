pub use ormic_core::driver::{Connection, Cursor, Driver, Query};

#[cfg(feature = "sqlite")]
pub use ormic_driver_sqlite::Sqlite;
