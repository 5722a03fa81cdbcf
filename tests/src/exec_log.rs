use crate::logging_driver::DriverOp;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    fn ops(&self) -> MutexGuard<'_, Vec<DriverOp>> {
        self.ops.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.ops().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops().is_empty()
    }

    /// Statement text of every logged query, in execution order
    pub fn sql(&self) -> Vec<String> {
        self.ops().iter().map(|op| op.query.sql.clone()).collect()
    }

    /// Count queries whose statement text starts with `prefix`
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.ops()
            .iter()
            .filter(|op| op.query.sql.starts_with(prefix))
            .count()
    }

    pub fn clear(&mut self) {
        self.ops().clear();
    }

    /// Remove and return the first operation from the log
    pub fn pop(&mut self) -> Option<DriverOp> {
        let mut ops = self.ops();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }
}
