use ormic_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value<'a>(ValueInner<'a>);

#[derive(Debug)]
enum ValueInner<'a> {
    Borrowed(&'a CoreValue),
    Owned(CoreValue),
}

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(ValueInner::Borrowed(value))
    }
}

impl Value<'static> {
    /// Converts a SQLite value within a row to an ormic value.
    ///
    /// SQLite does not preserve the declared column type, so the field layer
    /// narrows these further (text into DATETIME, integers into FLOAT).
    pub fn from_sql(row: &Row, index: usize) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver)?;

        let core_value = match value {
            SqlValue::Null => stmt::Value::Null,
            SqlValue::Integer(value) => stmt::Value::I64(value),
            SqlValue::Real(value) => stmt::Value::F64(value),
            SqlValue::Text(value) => stmt::Value::String(value),
            SqlValue::Blob(value) => stmt::Value::Bytes(value),
        };

        Ok(Value(ValueInner::Owned(core_value)))
    }

    /// Converts this SQLite driver value into the core ormic value.
    pub fn into_inner(self) -> CoreValue {
        match self.0 {
            ValueInner::Borrowed(value) => value.clone(),
            ValueInner::Owned(value) => value,
        }
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        let value = match &self.0 {
            ValueInner::Borrowed(value) => *value,
            ValueInner::Owned(value) => value,
        };

        match value {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::DateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format("%Y-%m-%d %H:%M:%S%.f").to_string(),
            ))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
