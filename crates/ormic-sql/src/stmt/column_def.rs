/// One column of a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,

    /// Storage type name, written as is
    pub storage_ty: String,
}
