use ormic_core::stmt::Value;

/// Conjunction of `column = value` equalities.
///
/// An empty filter matches every row.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub equalities: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equalities.push((column.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.equalities.is_empty()
    }
}

impl<C: Into<String>> FromIterator<(C, Value)> for Filter {
    fn from_iter<T: IntoIterator<Item = (C, Value)>>(iter: T) -> Self {
        Self {
            equalities: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value))
                .collect(),
        }
    }
}
