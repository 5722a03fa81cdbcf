use ormic_core::{
    async_trait,
    driver::{Connection, Cursor, Driver, Query},
    Result,
};

use std::{
    borrow::Cow,
    sync::{Arc, Mutex, PoisonError},
};

#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Log of all queries executed through this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

/// One executed query and the cursor it produced.
#[derive(Debug, Clone)]
pub struct DriverOp {
    pub query: Query,
    pub cursor: Cursor,
}

/// A connection wrapper that records every query before handing back the
/// result
#[derive(Debug)]
pub struct LoggingConnection {
    inner: Box<dyn Connection>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn execute(&mut self, query: &Query) -> Result<Cursor> {
        let cursor = self.inner.execute(query).await?;

        self.ops_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DriverOp {
                query: query.clone(),
                cursor: cursor.clone(),
            });

        Ok(cursor)
    }

    async fn commit(&mut self) -> Result<()> {
        self.inner.commit().await
    }
}
