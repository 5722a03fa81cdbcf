use crate::{
    db::{Db, Shared},
    schema::{self, ModelBuilder},
    Error, Record, Result, Value,
};

use std::{
    fmt, ops,
    sync::{Arc, OnceLock, Weak},
};

/// Handle to a declared model schema.
///
/// Cloning is cheap; clones share the schema and the owning session. The
/// owner is the first [`Db`] the model is registered with, and every
/// persistence operation on the model or its records goes through it.
#[derive(Clone)]
pub struct Model {
    inner: Arc<ModelInner>,
}

struct ModelInner {
    schema: schema::Model,

    /// Back-reference to the owning session
    db: OnceLock<Weak<Shared>>,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    pub fn schema(&self) -> &schema::Model {
        &self.inner.schema
    }

    /// Sets the owning session. Returns `false` if the model already has one.
    pub(crate) fn attach(&self, shared: &Arc<Shared>) -> bool {
        self.inner.db.set(Arc::downgrade(shared)).is_ok()
    }

    /// The session the model was first registered with.
    pub fn db(&self) -> Result<Db> {
        self.inner
            .db
            .get()
            .and_then(Weak::upgrade)
            .map(Db::from_shared)
            .ok_or_else(|| Error::not_registered(&self.name))
    }

    /// Builds a record from the given values; fields not given hold their
    /// default.
    pub fn record<'a>(&self, values: impl IntoIterator<Item = (&'a str, Value)>) -> Result<Record> {
        Record::new(self, values)
    }

    /// A record holding every field's default.
    pub fn new_record(&self) -> Record {
        Record::with_defaults(self)
    }

    pub async fn fetch<'a>(
        &self,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Option<Record>> {
        self.db()?.fetch(self, values).await
    }

    pub async fn fetch_all<'a>(
        &self,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Vec<Record>> {
        self.db()?.fetch_all(self, values).await
    }

    /// Looks up a cached record without touching storage.
    pub fn get<'a>(
        &self,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Option<Record>> {
        Ok(self.db()?.get(self, values))
    }

    pub async fn get_or_fetch<'a>(
        &self,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Option<Record>> {
        self.db()?.get_or_fetch(self, values).await
    }
}

impl From<schema::Model> for Model {
    fn from(schema: schema::Model) -> Self {
        Model {
            inner: Arc::new(ModelInner {
                schema,
                db: OnceLock::new(),
            }),
        }
    }
}

impl ops::Deref for Model {
    type Target = schema::Model;

    fn deref(&self) -> &Self::Target {
        &self.inner.schema
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Model {}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("schema", &self.inner.schema)
            .field("registered", &self.inner.db.get().is_some())
            .finish()
    }
}
