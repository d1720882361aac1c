use super::{Assignments, Expr};
use crate::schema::TableId;

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// The table being updated.
    pub table: TableId,

    /// SET clauses.
    pub assignments: Assignments,

    /// WHERE
    pub filter: Option<Expr>,
}

impl Update {
    pub fn new(table: impl Into<TableId>) -> Self {
        Self {
            table: table.into(),
            assignments: Assignments::default(),
            filter: None,
        }
    }

    pub fn set(mut self, column: impl Into<crate::schema::ColumnId>, value: impl Into<Expr>) -> Self {
        self.assignments.set(column, value);
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}
