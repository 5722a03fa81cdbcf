use super::TypeMap;
use crate::{
    stmt::{Primitive, Type, Value},
    Error, Result,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Describes one column of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Column name
    pub name: String,

    /// The value type held by the field
    pub ty: Type,

    /// The storage column type, as declared
    pub storage_ty: String,

    /// Value used when an instance does not set the field. Not checked
    /// against `ty`.
    pub default: Option<Value>,
}

/// How a field's type was declared: by value type or by storage type name.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    App(Type),
    Storage(String),
}

impl From<Type> for FieldTy {
    fn from(value: Type) -> Self {
        FieldTy::App(value)
    }
}

impl From<&str> for FieldTy {
    fn from(value: &str) -> Self {
        FieldTy::Storage(value.to_string())
    }
}

impl From<String> for FieldTy {
    fn from(value: String) -> Self {
        FieldTy::Storage(value)
    }
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

impl Field {
    /// Creates a field, resolving the other half of the type pair through the
    /// [`TypeMap`].
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<FieldTy>,
        default: Option<Value>,
    ) -> Result<Field> {
        let (ty, storage_ty) = match ty.into() {
            FieldTy::App(ty) => (ty, TypeMap::storage_type(ty)?.to_string()),
            FieldTy::Storage(storage_ty) => (TypeMap::value_type(&storage_ty)?, storage_ty),
        };

        Ok(Field {
            name: name.into(),
            ty,
            storage_ty,
            default,
        })
    }

    /// Creates a field typed after a Rust primitive.
    pub fn primitive<T: Primitive>(name: impl Into<String>) -> Result<Field> {
        Field::new(name, T::ty(), None)
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Field {
        self.default = Some(default.into());
        self
    }

    /// The value an instance holds when the field was never set.
    pub fn default_value(&self) -> Value {
        self.default.clone().unwrap_or_default()
    }

    /// Column definition, e.g. `name TEXT`.
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.name, self.storage_ty)
    }

    /// Checks that `value` may be assigned to this field.
    pub fn check(&self, value: &Value) -> Result<()> {
        if self.ty.is_instance(value) {
            Ok(())
        } else {
            Err(Error::invalid_field_value(&self.name, self.ty))
        }
    }

    /// Parses a raw textual representation into a value of the field's type.
    pub fn coerce(&self, raw: &str) -> Result<Value> {
        let fail = || Error::type_conversion(Value::from(raw), self.ty);

        match self.ty {
            Type::String => Ok(Value::String(raw.to_string())),
            Type::I64 => raw.trim().parse().map(Value::I64).map_err(|_| fail()),
            Type::F64 => raw.trim().parse().map(Value::F64).map_err(|_| fail()),
            Type::Bool => match raw.trim() {
                "1" | "true" | "TRUE" => Ok(Value::Bool(true)),
                "0" | "false" | "FALSE" => Ok(Value::Bool(false)),
                _ => Err(fail()),
            },
            Type::Bytes => Ok(Value::Bytes(raw.as_bytes().to_vec())),
            Type::DateTime => parse_datetime(raw.trim())
                .map(Value::DateTime)
                .ok_or_else(fail),
        }
    }

    /// Converts a value read from storage into the field's type.
    ///
    /// Storage engines hand back their own representation: SQLite returns
    /// DATETIME columns as text and may return whole FLOATs as integers.
    /// Text that does not parse as the field's type is returned as is, since
    /// unchecked defaults may have stored it.
    pub fn load(&self, value: Value) -> Result<Value> {
        match (self.ty, value) {
            (_, Value::Null) => Ok(Value::Null),
            (Type::F64, Value::I64(v)) => Ok(Value::F64(v as f64)),
            (Type::Bool, Value::I64(v)) => Ok(Value::Bool(v != 0)),
            (ty, Value::String(raw)) if ty != Type::String => {
                Ok(self.coerce(&raw).unwrap_or(Value::String(raw)))
            }
            (ty, value) if ty.is_instance(&value) => Ok(value),
            (ty, value) => Err(Error::type_conversion(value, ty)),
        }
    }
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
