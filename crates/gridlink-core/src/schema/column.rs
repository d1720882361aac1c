use super::{ProtoType, TableId};
use crate::stmt;

use std::fmt;

/// A column of a logical table, together with its wire-protocol metadata.
///
/// The wire metadata describes where the column's value physically lives in
/// the document tree: `tag` identifies the field at its nesting level,
/// `parent_tag`/`parent_attribute` are set when the column was inlined from an
/// embedded message one level below its owning table, and `pseudo` marks a
/// synthetic join-helper column that mirrors the merged parent's key and is
/// never sent to the store.
#[derive(Debug, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column as the relational layer sees it.
    pub name: String,

    /// The column's runtime type.
    pub ty: stmt::Type,

    /// The declared wire type. `None` only for pseudo columns.
    pub storage_ty: Option<ProtoType>,

    /// Whether or not the column is nullable.
    pub nullable: bool,

    /// False for columns that must never appear in a projection.
    pub selectable: bool,

    /// False for columns that must never appear in an assignment.
    pub updatable: bool,

    /// Declared default, filled in for inserts that omit the column.
    pub default_value: Option<stmt::Value>,

    /// True if the column is the table's document identity.
    pub primary_key: bool,

    /// Wire tag of the field. Mandatory for leaf columns.
    pub tag: Option<u32>,

    /// Set when the column's message is embedded one level below its owning
    /// table; the value is the embedding field's tag.
    pub parent_tag: Option<u32>,

    /// Attribute name of the embedded message this column lives under.
    pub parent_attribute: Option<String>,

    /// Set when the column represents an embedded message itself.
    pub message_name: Option<String>,

    /// Set on synthetic join-helper columns; holds the child attribute the
    /// column was generated for. Pseudo columns mirror the merged parent's
    /// key and are rewritten to it before anything is emitted.
    pub pseudo: Option<String>,

    /// The un-prefixed wire field name, when `name` was prefixed during
    /// schema import (e.g. `g3_e1` for wire field `e1`).
    pub name_in_source: Option<String>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Column {
    pub fn is_pseudo(&self) -> bool {
        self.pseudo.is_some()
    }

    /// The field name used on the wire and in filter queries.
    pub fn wire_name(&self) -> &str {
        self.name_in_source.as_deref().unwrap_or(&self.name)
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
