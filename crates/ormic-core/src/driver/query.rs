use crate::stmt::Value;

/// Statement text plus the values bound to its placeholders, in placeholder
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Query {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// A statement with no bound values.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::new(sql, vec![])
    }
}

impl From<&str> for Query {
    fn from(sql: &str) -> Self {
        Query::raw(sql)
    }
}

impl From<String> for Query {
    fn from(sql: String) -> Self {
        Query::raw(sql)
    }
}
