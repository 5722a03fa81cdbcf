use super::{CacheConfig, Db};
use crate::{driver::Driver, Model, Result};

/// Configures a [`Db`] before connecting it.
#[derive(Debug)]
pub struct Builder {
    /// Models to register, in order
    models: Vec<Model>,

    cache: CacheConfig,

    /// Create missing tables on connect
    create_tables: bool,
}

impl Builder {
    pub fn register(&mut self, model: &Model) -> &mut Self {
        self.models.push(model.clone());
        self
    }

    /// Sets the cache flag and the per-model record limit.
    pub fn cache(&mut self, enabled: bool, limit: usize) -> &mut Self {
        self.cache = CacheConfig { enabled, limit };
        self
    }

    /// Whether `connect` creates a table per registered model. Defaults to
    /// `true`.
    pub fn create_tables(&mut self, create_tables: bool) -> &mut Self {
        self.create_tables = create_tables;
        self
    }

    /// Builds an unconnected session.
    pub fn build(&self) -> Db {
        let db = Db::new();
        for model in &self.models {
            db.register_model(model);
        }
        db.set_caching(self.cache.enabled, self.cache.limit);
        db
    }

    pub async fn connect(&self, url: &str) -> Result<Db> {
        let db = self.build();
        db.connect(url, self.create_tables).await?;
        Ok(db)
    }

    pub async fn connect_with(&self, driver: &dyn Driver) -> Result<Db> {
        let db = self.build();
        db.connect_with(driver, self.create_tables).await?;
        Ok(db)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            models: vec![],
            cache: CacheConfig::default(),
            create_tables: true,
        }
    }
}
