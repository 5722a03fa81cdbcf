use ormic_core::stmt::Value;

use std::fmt;

/// Renders a value the way it is written inside statement text: strings are
/// single-quoted, everything else is written bare.
///
/// ```
/// use ormic_core::stmt::Value;
/// use ormic_sql::Literal;
///
/// assert_eq!(Literal(&Value::from("a")).to_string(), "'a'");
/// assert_eq!(Literal(&Value::from(1)).to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Literal<'a>(pub &'a Value);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("NULL"),
            Value::Bool(true) => f.write_str("TRUE"),
            Value::Bool(false) => f.write_str("FALSE"),
            Value::I64(v) => write!(f, "{v}"),
            // Debug keeps the fractional part of whole numbers (`1.0`)
            Value::F64(v) => write!(f, "{v:?}"),
            Value::String(v) => {
                f.write_str("'")?;
                f.write_str(&v.replace('\'', "''"))?;
                f.write_str("'")
            }
            Value::Bytes(v) => {
                f.write_str("X'")?;
                for byte in v {
                    write!(f, "{byte:02X}")?;
                }
                f.write_str("'")
            }
            Value::DateTime(v) => write!(f, "{v}"),
        }
    }
}
