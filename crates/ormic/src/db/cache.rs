use crate::{Record, Value};

use ormic_core::schema::ModelId;

use std::collections::HashMap;

/// Global cache knobs, shared by every model bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Whether fetched records are admitted and looked up
    pub enabled: bool,

    /// Maximum number of records held per model
    pub limit: usize,
}

/// Bounded, admission-only record buckets keyed by model.
///
/// A full bucket drops new records rather than evicting old ones.
#[derive(Debug, Default)]
pub(crate) struct Cache {
    pub(crate) config: CacheConfig,
    buckets: HashMap<ModelId, Vec<Record>>,
}

impl Cache {
    /// Creates the model's bucket if it does not have one yet.
    pub(crate) fn register(&mut self, model: ModelId) {
        self.buckets.entry(model).or_default();
    }

    pub(crate) fn is_enabled_for(&self, model: ModelId) -> bool {
        self.config.enabled && self.buckets.contains_key(&model)
    }

    pub(crate) fn admit(&mut self, model: ModelId, records: impl IntoIterator<Item = Record>) {
        let limit = self.config.limit;
        let Some(bucket) = self.buckets.get_mut(&model) else {
            return;
        };

        // Capacity is taken from the front of `records`, duplicates included
        let remaining = limit.saturating_sub(bucket.len());
        if remaining == 0 {
            tracing::trace!(?model, limit, "cache bucket full");
            return;
        }

        for record in records.into_iter().take(remaining) {
            if !bucket.contains(&record) {
                tracing::trace!(?model, %record, "admitting record to cache");
                bucket.push(record);
            }
        }
    }

    pub(crate) fn get(&self, model: ModelId, values: &[(&str, Value)]) -> Option<Record> {
        if !self.is_enabled_for(model) {
            return None;
        }

        let hit = self.buckets.get(&model)?.iter().find(|record| {
            values.iter().all(|(name, value)| {
                record
                    .get(name)
                    .is_some_and(|held| held.loose_eq(value))
            })
        });

        if let Some(record) = hit {
            tracing::trace!(?model, %record, "cache hit");
        }

        hit.cloned()
    }

    #[cfg(test)]
    pub(crate) fn bucket(&self, model: ModelId) -> &[Record] {
        self.buckets.get(&model).map(Vec::as_slice).unwrap_or(&[])
    }
}
