use super::{Filter, Statement};

use ormic_core::schema::Model;

/// Selects whole rows, columns listed in field order so results can be
/// matched to fields by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub columns: Vec<String>,
    pub filter: Filter,
    pub limit: Option<u64>,
}

impl Statement {
    pub fn select(model: &Model, filter: Filter) -> Self {
        Select {
            table: model.table_name.clone(),
            columns: super::columns(model),
            filter,
            limit: None,
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
