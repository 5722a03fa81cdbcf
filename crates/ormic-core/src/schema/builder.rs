use super::{Field, FieldTy, Model, ModelId};
use crate::{stmt::Value, Result};

use indexmap::IndexMap;

/// Collects field declarations and produces an immutable [`Model`].
///
/// Declarations are resolved in [`build`](Self::build), so a bad type only
/// surfaces there.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    name: String,
    table_name: Option<String>,
    fields: IndexMap<String, Declaration>,
}

#[derive(Debug, Clone)]
enum Declaration {
    /// Synthesized from a type and an optional default
    Synthesized {
        ty: FieldTy,
        default: Option<Value>,
    },

    /// Explicitly pre-built field, used as is
    Prebuilt(Field),
}

impl ModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            fields: IndexMap::new(),
        }
    }

    /// Overrides the table name, which defaults to the model name.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn field(self, name: impl Into<String>, ty: impl Into<FieldTy>) -> Self {
        self.declare(
            name.into(),
            Declaration::Synthesized {
                ty: ty.into(),
                default: None,
            },
        )
    }

    pub fn field_with_default(
        self,
        name: impl Into<String>,
        ty: impl Into<FieldTy>,
        default: impl Into<Value>,
    ) -> Self {
        self.declare(
            name.into(),
            Declaration::Synthesized {
                ty: ty.into(),
                default: Some(default.into()),
            },
        )
    }

    /// Declares an attribute backed by an already constructed field. The
    /// field's own name is the column name.
    pub fn prebuilt(self, name: impl Into<String>, field: Field) -> Self {
        self.declare(name.into(), Declaration::Prebuilt(field))
    }

    fn declare(mut self, name: String, declaration: Declaration) -> Self {
        // Redeclaring keeps the original position
        self.fields.insert(name, declaration);
        self
    }

    pub fn build(self) -> Result<Model> {
        let fields = self
            .fields
            .into_iter()
            .map(|(name, declaration)| {
                let field = match declaration {
                    Declaration::Prebuilt(field) => field,
                    Declaration::Synthesized { ty, default } => {
                        Field::new(name.clone(), ty, default)?
                    }
                };
                Ok((name, field))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        Ok(Model {
            id: ModelId::generate(),
            table_name: self.table_name.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            fields,
        })
    }
}
