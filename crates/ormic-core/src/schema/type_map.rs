use crate::{stmt::Type, Error, Result};

/// One row of the type map: a value type, its canonical storage name, then
/// any aliases.
struct Datatype {
    ty: Type,
    storage: &'static [&'static str],
}

const DATATYPES: &[Datatype] = &[
    Datatype {
        ty: Type::String,
        storage: &["TEXT", "CHAR"],
    },
    Datatype {
        ty: Type::I64,
        storage: &["INTEGER", "BIGINT"],
    },
    Datatype {
        ty: Type::F64,
        storage: &["FLOAT"],
    },
    Datatype {
        ty: Type::DateTime,
        storage: &["DATETIME"],
    },
];

/// Bidirectional mapping between value types and storage column type names.
///
/// ```text
/// Type::String    <->  TEXT     (alias CHAR)
/// Type::I64       <->  INTEGER  (alias BIGINT)
/// Type::F64       <->  FLOAT
/// Type::DateTime  <->  DATETIME
/// ```
///
/// `Type::Bool` and `Type::Bytes` can appear in statements but have no
/// column type, so fields cannot be declared with them.
#[derive(Debug, Clone, Copy)]
pub struct TypeMap;

impl TypeMap {
    /// Canonical storage type name for a value type.
    pub fn storage_type(ty: Type) -> Result<&'static str> {
        DATATYPES
            .iter()
            .find(|datatype| datatype.ty == ty)
            .map(|datatype| datatype.storage[0])
            .ok_or_else(|| Error::unsupported_type(format!("{ty:?}")))
    }

    /// Value type for a storage type name, canonical or alias. Matching
    /// ignores ASCII case.
    pub fn value_type(storage: &str) -> Result<Type> {
        DATATYPES
            .iter()
            .find(|datatype| {
                datatype
                    .storage
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(storage))
            })
            .map(|datatype| datatype.ty)
            .ok_or_else(|| Error::unsupported_type(storage))
    }

    /// All `(value type, canonical storage name)` pairs.
    pub fn entries() -> impl Iterator<Item = (Type, &'static str)> {
        DATATYPES
            .iter()
            .map(|datatype| (datatype.ty, datatype.storage[0]))
    }
}
