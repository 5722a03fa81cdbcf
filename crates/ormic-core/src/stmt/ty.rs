/// The type of a [`Value`](super::Value) as the application sees it.
///
/// Storage column types are a separate concern, see
/// [`TypeMap`](crate::schema::TypeMap) for how the two relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// String type
    String,

    /// Raw bytes
    Bytes,

    /// Civil date and time without a timezone
    DateTime,
}

impl Type {
    /// Returns `true` if `value` may be held by a field of this type.
    ///
    /// No coercion happens here: an `I64` is not an `F64`.
    pub fn is_instance(self, value: &super::Value) -> bool {
        value.ty() == Some(self)
    }
}
