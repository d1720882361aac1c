use super::{Column, ColumnId};

use std::fmt;

/// A logical table backed by one document type in the remote store.
///
/// A table either maps to a top-level document (possibly with embedded
/// columns), or is merged into another table's document as a nested child
/// group, in which case `merge_into`, `parent_tag` and `parent_attribute`
/// describe where its rows physically live.
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies a table.
    pub id: TableId,

    /// Name of the table.
    pub name: String,

    /// The table's columns.
    pub columns: Vec<Column>,

    /// The column used as document identity, if any. At most one column.
    pub primary_key: Option<ColumnId>,

    /// The wire message name, when it differs from the table name.
    pub message_name: Option<String>,

    /// Name of the parent table whose documents physically contain this
    /// table's rows.
    pub merge_into: Option<String>,

    /// Tag of the field in the parent document that holds this table's rows.
    pub parent_tag: Option<u32>,

    /// Attribute name of that field.
    pub parent_attribute: Option<String>,
}

/// Uniquely identifies a table.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    /// The message name documents of this table are addressed by.
    pub fn message_name(&self) -> &str {
        self.message_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_merged(&self) -> bool {
        self.merge_into.is_some()
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_column(&self) -> Option<&Column> {
        self.primary_key.map(|id| &self.columns[id.index])
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
