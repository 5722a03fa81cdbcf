use super::Statement;

use ormic_core::{schema::Model, stmt::Value};

/// Inserts a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,

    /// One value per column
    pub values: Vec<Value>,
}

impl Statement {
    pub fn insert(model: &Model, values: Vec<Value>) -> Self {
        debug_assert_eq!(model.fields.len(), values.len());

        Insert {
            table: model.table_name.clone(),
            columns: super::columns(model),
            values,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
