use super::{Field, ModelBuilder};
use crate::stmt::{Type, Value};

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// The declared shape of a record type: table name and ordered fields.
///
/// Field order defines both the `CREATE TABLE` column order and the position
/// each column takes in a result row.
#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the process
    pub id: ModelId,

    /// Name of the model
    pub name: String,

    /// Table the model's records are stored in
    pub table_name: String,

    /// Fields keyed by attribute name, in declaration order
    pub fields: IndexMap<String, Field>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

/// Serializable summary of a model, see [`Model::describe`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescription {
    pub name: String,
    pub table: String,
    pub fields: Vec<FieldDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescription {
    pub name: String,
    pub ty: Type,
    pub storage_ty: String,
    pub default: Option<Value>,
}

impl ModelId {
    /// Generate a unique model ID at runtime.
    ///
    /// A global atomic counter hands out each ID once; IDs start at 0.
    pub fn generate() -> ModelId {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static NEXT_MODEL_ID: AtomicUsize = AtomicUsize::new(0);

        ModelId(NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    /// Attribute names in declaration order.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Table definition, e.g. `USERS (id INTEGER, name TEXT)`.
    pub fn to_sql_table(&self) -> String {
        let columns = self
            .fields()
            .map(Field::to_sql)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} ({})", self.table_name, columns)
    }

    pub fn describe(&self) -> ModelDescription {
        ModelDescription {
            name: self.name.clone(),
            table: self.table_name.clone(),
            fields: self
                .fields()
                .map(|field| FieldDescription {
                    name: field.name.clone(),
                    ty: field.ty,
                    storage_ty: field.storage_ty.clone(),
                    default: field.default.clone(),
                })
                .collect(),
        }
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
