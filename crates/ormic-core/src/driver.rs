mod cursor;
pub use cursor::Cursor;

mod query;
pub use query::Query;

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to a storage engine.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The locator this driver was created from.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A live connection to the storage engine.
///
/// Connections are not safe for concurrent use; callers serialize access.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Executes one statement and returns its buffered result rows.
    async fn execute(&mut self, query: &Query) -> Result<Cursor>;

    /// Commits pending changes.
    async fn commit(&mut self) -> Result<()>;
}
