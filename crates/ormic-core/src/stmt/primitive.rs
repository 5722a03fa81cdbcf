use super::{Type, Value};
use crate::{Error, Result};
use chrono::NaiveDateTime;

/// A Rust type that maps onto a single [`Type`] and can be loaded back out of
/// a [`Value`].
pub trait Primitive: Sized {
    fn ty() -> Type;

    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ($ty:ty, $name:ident) => {
        impl Primitive for $ty {
            fn ty() -> Type {
                Type::$name
            }

            fn load(value: Value) -> Result<Self> {
                match value {
                    Value::$name(v) => Ok(v),
                    value => Err(Error::type_conversion(value, Type::$name)),
                }
            }
        }
    };
}

impl_primitive!(bool, Bool);
impl_primitive!(i64, I64);
impl_primitive!(f64, F64);
impl_primitive!(String, String);
impl_primitive!(Vec<u8>, Bytes);
impl_primitive!(NaiveDateTime, DateTime);

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }
}
