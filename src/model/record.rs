use std::collections::HashMap;
use std::iter::FromIterator;

use super::column::Column;
use crate::error::Result;

/// One decoded data row: raw string values keyed by the known columns the
/// active header assigned to them.
#[derive(Debug)]
pub struct Record {
    columns: HashMap<Column, String>,
}

impl Record {
    /// Presence check used by the family classification.
    pub fn contains(&self, column: Column) -> bool {
        self.columns.contains_key(&column)
    }

    /// Field read used by the emitters. A missing column is a hard error
    /// that aborts the whole run.
    pub fn get(&self, column: Column) -> Result<&str> {
        match self.columns.get(&column) {
            Some(value) => Ok(value),
            None => Err(format!("record has no {} column", column.name()).into()),
        }
    }
}

impl FromIterator<(Column, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (Column, String)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
