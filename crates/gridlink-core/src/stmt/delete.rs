use super::Expr;
use crate::schema::TableId;

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// The table to delete from.
    pub table: TableId,

    /// WHERE
    pub filter: Option<Expr>,
}

impl Delete {
    pub fn new(table: impl Into<TableId>) -> Self {
        Self {
            table: table.into(),
            filter: None,
        }
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}
