use super::{Column, ColumnId, Table, TableId};
use crate::{Error, Result};

/// The full set of logical tables visible to the relational layer.
#[derive(Debug, Default)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    /// The table a merged table's rows physically live in, or the table
    /// itself when it is not merged.
    pub fn merge_root<'a>(&'a self, table: &'a Table) -> Result<&'a Table> {
        match &table.merge_into {
            Some(parent) => self.table_by_name(parent).ok_or_else(|| {
                Error::schema(format!(
                    "table `{}` is merged into unknown table `{}`",
                    table.name, parent
                ))
            }),
            None => Ok(table),
        }
    }

    /// Tables whose rows are folded into the given table's documents.
    pub fn merged_children<'a>(
        &'a self,
        parent: &'a Table,
    ) -> impl Iterator<Item = &'a Table> + 'a {
        self.tables
            .iter()
            .filter(move |table| table.merge_into.as_deref() == Some(parent.name.as_str()))
    }
}
