use super::{Filter, Statement};

use ormic_core::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// `SET` assignments
    pub assignments: Vec<(String, Value)>,

    /// Rows to update; `None` updates every row
    pub filter: Option<Filter>,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
