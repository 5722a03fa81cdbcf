use super::{ColumnDef, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub table: String,

    /// Columns in declaration order
    pub columns: Vec<ColumnDef>,

    pub if_not_exists: bool,
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Statement::CreateTable(value)
    }
}
