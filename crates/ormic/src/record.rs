use crate::{Model, Primitive, Result, Value, ValueRecord};

use ormic_core::Error;
use ormic_sql::Literal;

use std::fmt;

/// One instance of a [`Model`]: a value per field, in field order.
///
/// Every value held is an instance of its field's type, except defaults,
/// which are taken as declared.
#[derive(Clone)]
pub struct Record {
    model: Model,

    /// Current values, positionally aligned with the model's fields
    values: Vec<Value>,

    /// Values the record last had in storage
    persisted: Vec<Value>,
}

impl Record {
    /// Builds a record from `(field, value)` pairs. Nothing is assigned
    /// unless every pair is valid.
    pub fn new<'a>(
        model: &Model,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Record> {
        let mut record = Record::with_defaults(model);
        record.set_values(values)?;
        record.mark_persisted();
        Ok(record)
    }

    pub(crate) fn with_defaults(model: &Model) -> Record {
        let values = model.fields().map(|field| field.default_value()).collect::<Vec<_>>();

        Record {
            model: model.clone(),
            persisted: values.clone(),
            values,
        }
    }

    /// Rebuilds a record from a result row, positionally zipped against the
    /// model's fields.
    pub(crate) fn from_row(model: &Model, row: ValueRecord) -> Result<Record> {
        let mut record = Record::with_defaults(model);

        for ((slot, field), value) in record.values.iter_mut().zip(model.fields()).zip(row) {
            *slot = field.load(value)?;
        }

        record.mark_persisted();
        Ok(record)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Current value of a field, `None` if the model has no such field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.model
            .fields
            .get_index_of(name)
            .map(|index| &self.values[index])
    }

    /// Current value of a field converted to a Rust type.
    pub fn get_as<T: Primitive>(&self, name: &str) -> Result<T> {
        match self.get(name) {
            Some(value) => T::load(value.clone()),
            None => Err(Error::unknown_field(name)),
        }
    }

    /// Assigns one field after checking the value against the field type.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let (index, value) = self.check(name, value.into())?;
        self.values[index] = value;
        Ok(())
    }

    /// Assigns several fields. On error the record is left unchanged.
    pub fn set_values<'a>(
        &mut self,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<()> {
        let checked = values
            .into_iter()
            .map(|(name, value)| self.check(name, value))
            .collect::<Result<Vec<_>>>()?;

        for (index, value) in checked {
            self.values[index] = value;
        }

        Ok(())
    }

    fn check(&self, name: &str, value: Value) -> Result<(usize, Value)> {
        let Some((index, _, field)) = self.model.fields.get_full(name) else {
            return Err(Error::unknown_field(name));
        };

        field.check(&value)?;
        Ok((index, value))
    }

    /// Values in field order.
    pub fn values(&self) -> Vec<Value> {
        self.values.clone()
    }

    pub(crate) fn persisted(&self) -> &[Value] {
        &self.persisted
    }

    pub(crate) fn mark_persisted(&mut self) {
        self.persisted.clone_from(&self.values);
    }

    /// Values as a statement tuple, e.g. `(1, 'alice')`.
    pub fn to_sql_literal(&self) -> String {
        let literals = self
            .values
            .iter()
            .map(|value| Literal(value).to_string())
            .collect::<Vec<_>>();
        format!("({})", literals.join(", "))
    }

    /// Field equalities joined by `joiner`, e.g. `id = 1 AND name = 'alice'`
    /// for `" AND "`.
    pub fn to_sql_fields(&self, joiner: &str) -> String {
        self.model
            .fields()
            .zip(&self.values)
            .map(|(field, value)| format!("{} = {}", field.name, Literal(value)))
            .collect::<Vec<_>>()
            .join(joiner)
    }

    /// Inserts the record into the model's database.
    pub async fn save(&mut self) -> Result<()> {
        let db = self.model.db()?;
        db.save(self).await
    }

    /// Assigns `changes`, then writes the record over its stored row if
    /// `persist` is set.
    pub async fn update<'a>(
        &mut self,
        persist: bool,
        changes: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<()> {
        self.set_values(changes)?;

        if persist {
            let db = self.model.db()?;
            db.update(self).await?;
        }

        Ok(())
    }

    /// Deletes stored rows equal to the record, at most `limit` of them.
    pub async fn delete(&self, limit: Option<u64>) -> Result<()> {
        self.model.db()?.delete(self, limit).await
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.model == other.model && self.values == other.values
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.model.name)?;

        for (i, (name, value)) in self.model.field_names().zip(&self.values).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={}", Literal(value))?;
        }

        f.write_str(")")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(&self.model.name);
        for (name, value) in self.model.field_names().zip(&self.values) {
            s.field(name, value);
        }
        s.finish()
    }
}
