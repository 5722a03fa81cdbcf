use crate::stmt::ValueRecord;

use std::collections::VecDeque;

/// Rows produced by an executed statement.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cursor {
    rows: VecDeque<ValueRecord>,
    rows_affected: u64,
}

impl Cursor {
    /// A cursor for a statement that returned rows.
    pub fn from_rows(rows: Vec<ValueRecord>) -> Self {
        Self {
            rows: rows.into(),
            rows_affected: 0,
        }
    }

    /// A cursor for a statement that only changed rows.
    pub fn count(rows_affected: u64) -> Self {
        Self {
            rows: VecDeque::new(),
            rows_affected,
        }
    }

    pub fn rows_affected(&self) -> u64 {
        self.rows_affected
    }

    /// Takes the next row, if any.
    pub fn fetch_one(&mut self) -> Option<ValueRecord> {
        self.rows.pop_front()
    }

    /// Takes all remaining rows.
    pub fn fetch_all(&mut self) -> Vec<ValueRecord> {
        self.rows.drain(..).collect()
    }
}
