use super::Expr;
use crate::schema::TableId;

/// The FROM part of a query: a table with an optional correlation alias and
/// any inner joins.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub table: TableId,
    pub alias: Option<String>,
    pub joins: Vec<Join>,
}

/// An inner join against another table. Outer joins are not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: TableId,
    pub on: Expr,
}

impl Source {
    pub fn table(table: impl Into<TableId>) -> Self {
        Self {
            table: table.into(),
            alias: None,
            joins: vec![],
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn join(mut self, table: impl Into<TableId>, on: Expr) -> Self {
        self.joins.push(Join {
            table: table.into(),
            on,
        });
        self
    }
}

impl From<TableId> for Source {
    fn from(value: TableId) -> Self {
        Self::table(value)
    }
}
