use super::{Formatter, Literal, ToSql};

use ormic_core::stmt;

/// Receives the values of a statement as it is serialized.
pub trait Params {
    /// Records `value` and returns the placeholder to write in its place.
    fn push(&mut self, value: &stmt::Value) -> Placeholder;
}

/// What a value is replaced with in the statement text.
pub enum Placeholder {
    /// Positional parameter `?n`, 1-based
    Position(usize),

    /// The value itself, rendered as a literal
    Inline(String),
}

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder::Position(self.len())
    }
}

/// Writes values into the statement text instead of binding them.
///
/// Only meant for logging and display; inline text is not escaped for every
/// value type.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inline;

impl Params for Inline {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        Placeholder::Inline(Literal(value).to_string())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match self {
            Placeholder::Position(n) => write!(f.dst, "?{n}").unwrap(),
            Placeholder::Inline(literal) => f.dst.push_str(&literal),
        }
    }
}

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}
