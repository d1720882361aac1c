use super::Expr;
use crate::schema::{ColumnId, TableId};

/// An INSERT (or UPSERT) of a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// The table being inserted into.
    pub table: TableId,

    /// The columns named in the statement.
    pub columns: Vec<ColumnId>,

    /// One value expression per named column.
    pub values: Vec<Expr>,

    /// True when the statement should merge into an existing document
    /// instead of failing on a duplicate identity.
    pub upsert: bool,
}

impl Insert {
    pub fn new(table: impl Into<TableId>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            values: vec![],
            upsert: false,
        }
    }

    pub fn value(mut self, column: impl Into<ColumnId>, value: impl Into<Expr>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    pub fn upsert(mut self) -> Self {
        self.upsert = true;
        self
    }
}
