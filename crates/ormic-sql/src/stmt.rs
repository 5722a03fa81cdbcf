mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

use crate::{Inline, Serializer};

use ormic_core::{driver::Query, schema::Model};

/// A statement the session issues against storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// `CREATE TABLE IF NOT EXISTS` for the model's table.
    pub fn create_table(model: &Model) -> Self {
        CreateTable {
            table: model.table_name.clone(),
            columns: model
                .fields()
                .map(|field| ColumnDef {
                    name: field.name.clone(),
                    storage_ty: field.storage_ty.clone(),
                })
                .collect(),
            if_not_exists: true,
        }
        .into()
    }

    /// Serializes the statement with bound parameters.
    pub fn to_query(&self) -> Query {
        let mut params = vec![];
        let sql = Serializer::sqlite().serialize(self, &mut params);
        Query::new(sql, params)
    }

    /// Serializes the statement with values written inline as literals.
    pub fn to_sql_inline(&self) -> String {
        Serializer::sqlite().serialize(self, &mut Inline)
    }
}

/// Columns of `model` in field order.
pub(crate) fn columns(model: &Model) -> Vec<String> {
    model.fields().map(|field| field.name.clone()).collect()
}

impl From<&Statement> for Query {
    fn from(stmt: &Statement) -> Self {
        stmt.to_query()
    }
}

impl From<Statement> for Query {
    fn from(stmt: Statement) -> Self {
        stmt.to_query()
    }
}
