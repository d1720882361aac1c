use gridlink_core::{
    schema::{Column, ColumnId, Schema, Table},
    stmt, Error, Result,
};

/// Name-resolution context for one statement.
///
/// `top` is the table whose documents the store actually holds; when the
/// statement targets a merged table, `top` is the merge parent and `working`
/// remains the table the statement named, so that its columns can still be
/// qualified correctly.
pub(crate) struct Scope<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) top: &'a Table,
    pub(crate) working: &'a Table,
    pub(crate) alias: Option<&'a str>,
}

impl<'a> Scope<'a> {
    pub(crate) fn resolve(schema: &'a Schema, source: &'a stmt::Source) -> Result<Self> {
        let working = schema.table(source.table);
        let top = schema.merge_root(working)?;

        Ok(Self {
            schema,
            top,
            working,
            alias: source.alias.as_deref(),
        })
    }

    pub(crate) fn column(&self, id: ColumnId) -> &'a Column {
        self.schema.column(id)
    }

    pub(crate) fn is_merged(&self) -> bool {
        self.working.id != self.top.id
    }

    /// The textual path of a column in the filter-query grammar:
    /// `[alias.]parent_attribute.name`.
    ///
    /// The parent segment comes from the column itself when it was inlined
    /// from an embedded message, otherwise from its owning table when that
    /// table is folded into the root document. Pseudo columns mirror the
    /// root's key and are never prefixed with a parent segment.
    pub(crate) fn qualified_name(&self, column: &Column) -> String {
        let mut name = column.wire_name().to_string();

        let parent = match &column.parent_attribute {
            Some(parent) => Some(parent.as_str()),
            None if !column.is_pseudo() => self
                .schema
                .table(column.id.table)
                .parent_attribute
                .as_deref(),
            None => None,
        };

        if let Some(parent) = parent {
            name = format!("{parent}.{name}");
        }
        if let Some(alias) = self.alias {
            name = format!("{alias}.{name}");
        }
        name
    }

    /// Rewrite a pseudo column to the real key column it mirrors in the
    /// merged parent.
    pub(crate) fn normalize_pseudo(&self, column: &'a Column) -> Result<&'a Column> {
        normalize_pseudo(self.schema, column)
    }

    /// Whether the column is (part of) the root document's identity.
    pub(crate) fn is_top_pk(&self, column: &Column) -> bool {
        column.primary_key && column.id.table == self.top.id
    }

    /// A column that lives below the root document's top level: inlined from
    /// an embedded message, or belonging to a merged table.
    pub(crate) fn is_nested(&self, column: &Column) -> bool {
        column.parent_attribute.is_some()
            || column.message_name.is_some()
            || self.schema.table(column.id.table).is_merged()
    }
}

/// Rewrite a pseudo column to the real key column it mirrors in the merged
/// parent.
pub(crate) fn normalize_pseudo<'a>(schema: &'a Schema, column: &'a Column) -> Result<&'a Column> {
    if !column.is_pseudo() {
        return Ok(column);
    }

    let owner = schema.table(column.id.table);
    let parent = schema.merge_root(owner)?;
    parent.column_by_name(column.wire_name()).ok_or_else(|| {
        Error::schema(format!(
            "pseudo column `{}.{}` has no matching column in `{}`",
            owner.name, column.name, parent.name
        ))
    })
}
