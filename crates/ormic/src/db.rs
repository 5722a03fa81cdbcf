mod builder;
pub use builder::Builder;

mod cache;
pub use cache::CacheConfig;
use cache::Cache;

mod connect;

use crate::{Model, Record};

use ormic_core::{
    driver::{Connection, Cursor, Driver, Query},
    stmt::{Value, ValueRecord},
    Error, Result,
};
use ormic_sql::{
    stmt::{Delete, Filter, Update},
    Statement,
};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    /// Storage connection, unset until `connect`
    connection: tokio::sync::Mutex<Option<Box<dyn Connection>>>,

    /// Registered models, in registration order
    models: Mutex<Vec<Model>>,

    cache: Mutex<Cache>,
}

/// A database session: the storage connection, the registered models and a
/// per-model record cache.
///
/// Cloning is cheap and every clone refers to the same session.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

/// How many rows [`Db::execute`] should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    None,
    One,
    All,
}

/// Rows returned by [`Db::execute`], shaped by the requested [`Fetch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    None,
    One(Option<ValueRecord>),
    All(Vec<ValueRecord>),
}

impl Rows {
    pub fn into_one(self) -> Option<ValueRecord> {
        match self {
            Rows::One(row) => row,
            Rows::All(rows) => rows.into_iter().next(),
            Rows::None => None,
        }
    }

    pub fn into_all(self) -> Vec<ValueRecord> {
        match self {
            Rows::One(row) => row.into_iter().collect(),
            Rows::All(rows) => rows,
            Rows::None => vec![],
        }
    }
}

impl Db {
    /// Creates a session with no models and no connection.
    pub fn new() -> Db {
        Db::from_shared(Arc::new(Shared {
            connection: tokio::sync::Mutex::new(None),
            models: Mutex::new(vec![]),
            cache: Mutex::new(Cache::default()),
        }))
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn from_shared(shared: Arc<Shared>) -> Db {
        Db { shared }
    }

    /// Adds a model to this session.
    ///
    /// The first session a model is registered with becomes its owner, used
    /// by the operations on [`Model`] and [`Record`]. Registering the same
    /// model twice lists it twice.
    pub fn register_model(&self, model: &Model) {
        if !model.attach(&self.shared) {
            tracing::debug!(model = %model.name, "model is already owned by another session");
        }

        self.models().push(model.clone());
        self.cache().register(model.id);
    }

    /// Registered models, in registration order.
    pub fn models(&self) -> MutexGuard<'_, Vec<Model>> {
        self.shared
            .models
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn cache(&self) -> MutexGuard<'_, Cache> {
        self.shared
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Turns caching on or off and sets the per-model capacity. Records
    /// already cached stay, even past a lowered limit.
    pub fn set_caching(&self, enabled: bool, limit: usize) {
        self.cache().config = CacheConfig { enabled, limit };
    }

    pub fn cache_config(&self) -> CacheConfig {
        self.cache().config
    }

    /// Opens a connection from a URL such as `sqlite::memory:`.
    pub async fn connect(&self, url: &str, create_tables: bool) -> Result<()> {
        let driver = connect::driver(url)?;
        self.connect_with(driver.as_ref(), create_tables).await
    }

    /// Opens a connection through `driver`, then optionally creates the
    /// tables of every registered model.
    pub async fn connect_with(&self, driver: &dyn Driver, create_tables: bool) -> Result<()> {
        let connection = driver.connect().await?;
        tracing::debug!(url = %driver.url(), "connected");

        *self.shared.connection.lock().await = Some(connection);

        if create_tables {
            self.create_tables().await?;
        }

        Ok(())
    }

    pub async fn is_connected(&self) -> bool {
        self.shared.connection.lock().await.is_some()
    }

    /// Issues one `CREATE TABLE IF NOT EXISTS` per registered model, in
    /// registration order.
    pub async fn create_tables(&self) -> Result<()> {
        let models = self.models().clone();

        for model in &models {
            tracing::debug!(model = %model.name, table = %model.table_name, "creating table");
            self.exec(&Statement::create_table(model), true).await?;
        }

        Ok(())
    }

    /// Executes a statement, committing afterwards if `commit` is set.
    pub async fn execute(
        &self,
        query: impl Into<Query>,
        commit: bool,
        fetch: Fetch,
    ) -> Result<Rows> {
        let query = query.into();
        tracing::debug!(sql = %query.sql, params = query.params.len(), "executing query");

        let mut cursor = self.exec_query(&query, commit).await?;

        Ok(match fetch {
            Fetch::None => Rows::None,
            Fetch::One => Rows::One(cursor.fetch_one()),
            Fetch::All => Rows::All(cursor.fetch_all()),
        })
    }

    async fn exec(&self, stmt: &Statement, commit: bool) -> Result<Cursor> {
        tracing::debug!(sql = %stmt.to_sql_inline(), "executing statement");
        self.exec_query(&stmt.to_query(), commit).await
    }

    async fn exec_query(&self, query: &Query, commit: bool) -> Result<Cursor> {
        let mut connection = self.shared.connection.lock().await;
        let Some(connection) = connection.as_mut() else {
            return Err(Error::not_connected());
        };

        let cursor = connection.execute(query).await?;
        if commit {
            connection.commit().await?;
        }
        Ok(cursor)
    }

    /// Inserts the record as a new row.
    pub async fn save(&self, record: &mut Record) -> Result<()> {
        let stmt = Statement::insert(record.model(), record.values());
        self.exec(&stmt, true).await?;
        record.mark_persisted();
        Ok(())
    }

    /// Writes the record's current values over the row it was last
    /// persisted as.
    pub async fn update(&self, record: &mut Record) -> Result<()> {
        let model = record.model();
        let stmt: Statement = Update {
            table: model.table_name.clone(),
            assignments: columns(model, record.values()),
            filter: Some(columns(model, record.persisted().to_vec()).into_iter().collect()),
        }
        .into();

        self.exec(&stmt, true).await?;
        record.mark_persisted();
        Ok(())
    }

    /// Deletes rows equal to the record in every field, at most `limit` of
    /// them if given.
    pub async fn delete(&self, record: &Record, limit: Option<u64>) -> Result<()> {
        let model = record.model();
        let stmt: Statement = Delete {
            table: model.table_name.clone(),
            filter: columns(model, record.values()).into_iter().collect(),
            limit,
        }
        .into();

        self.exec(&stmt, true).await?;
        Ok(())
    }

    /// Fetches every record whose fields equal the given values.
    pub async fn fetch_all<'a>(
        &self,
        model: &Model,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Vec<Record>> {
        let stmt = Statement::select(model, filter(model, values)?);
        let rows = self.exec(&stmt, false).await?.fetch_all();

        let records = rows
            .into_iter()
            .map(|row| Record::from_row(model, row))
            .collect::<Result<Vec<_>>>()?;

        if self.caching_enabled(model) {
            self.admit_to_cache(model, records.iter().cloned());
        }

        Ok(records)
    }

    /// Fetches the first record whose fields equal the given values.
    pub async fn fetch<'a>(
        &self,
        model: &Model,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Option<Record>> {
        let stmt = Statement::select(model, filter(model, values)?);
        let Some(row) = self.exec(&stmt, false).await?.fetch_one() else {
            return Ok(None);
        };

        let record = Record::from_row(model, row)?;

        if self.caching_enabled(model) {
            self.admit_to_cache(model, [record.clone()]);
        }

        Ok(Some(record))
    }

    /// Returns `true` if caching is on and the model has a cache bucket.
    pub fn caching_enabled(&self, model: &Model) -> bool {
        self.cache().is_enabled_for(model.id)
    }

    /// Adds records to the model's cache bucket while it has room, skipping
    /// records equal to one already cached.
    pub fn admit_to_cache(&self, model: &Model, records: impl IntoIterator<Item = Record>) {
        self.cache().admit(model.id, records);
    }

    /// Looks up a cached record whose fields equal the given values.
    ///
    /// Never touches storage. A value for a field the model does not have
    /// matches nothing.
    pub fn get<'a>(
        &self,
        model: &Model,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Option<Record> {
        let values = values.into_iter().collect::<Vec<_>>();
        self.cache().get(model.id, &values)
    }

    /// Looks in the cache first, then fetches from storage.
    pub async fn get_or_fetch<'a>(
        &self,
        model: &Model,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Option<Record>> {
        let values = values.into_iter().collect::<Vec<_>>();

        if let Some(record) = self.get(model, values.iter().cloned()) {
            return Ok(Some(record));
        }

        self.fetch(model, values).await
    }
}

/// Pairs each column name with a value, in field order.
fn columns(model: &Model, values: Vec<Value>) -> Vec<(String, Value)> {
    model
        .fields()
        .map(|field| field.name.clone())
        .zip(values)
        .collect()
}

/// Translates attribute names into a column filter.
fn filter<'a>(model: &Model, values: impl IntoIterator<Item = (&'a str, Value)>) -> Result<Filter> {
    values
        .into_iter()
        .map(|(name, value)| match model.field(name) {
            Some(field) => Ok((field.name.clone(), value)),
            None => Err(Error::unknown_field(name)),
        })
        .collect::<Result<Vec<_>>>()
        .map(|equalities| Filter { equalities })
}

impl Default for Db {
    fn default() -> Self {
        Db::new()
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("models", &self.models().len())
            .field("cache", &self.cache_config())
            .finish()
    }
}
