use gridlink_core::{
    schema::{nested_tag, Column, ProtoType, Schema, Table},
    stmt,
    Error, Result,
};

use std::collections::BTreeMap;

/// Tag-indexed tree describing how one document type maps to the wire format.
///
/// The map is keyed by read tag (`field_number << 3 | wire_type`) so that a
/// decoder can dispatch on the raw tag it pulls off the wire. It carries only
/// shape, never data, and is reconstructible purely from table and column
/// metadata; build it once per top-level table and share it read-only.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WireMap {
    fields: BTreeMap<u32, WireField>,
}

/// One field of a message: a scalar/array leaf or a nested child group.
#[derive(Debug, Clone, PartialEq)]
pub struct WireField {
    /// Attribute name the value is stored under in a [`Document`].
    ///
    /// [`Document`]: crate::Document
    pub attribute: String,

    /// The field number written on the wire.
    pub write_tag: u32,

    /// `write_tag << 3 | wire_type`, as seen when reading.
    pub read_tag: u32,

    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Leaf {
        proto_ty: ProtoType,
        runtime_ty: stmt::Type,
        repeated: bool,
    },
    Group(WireMap),
}

impl WireMap {
    /// Build the wire map for a top-level table, folding in embedded columns
    /// and every table merged into it.
    ///
    /// Pure function of metadata; bad or missing tag information fails here,
    /// before any store I/O.
    pub fn build(schema: &Schema, top: &Table) -> Result<Self> {
        let mut map = Self::default();
        map.fold_columns(top)?;

        for child in schema.merged_children(top) {
            let parent_tag = child.parent_tag.ok_or_else(|| {
                Error::schema(format!(
                    "merged table `{}` has no parent tag",
                    child.name
                ))
            })?;

            let mut nested = Self::default();
            nested.fold_columns(child)?;
            map.insert_group(parent_tag, group_attribute(child).to_string(), nested)?;
        }

        Ok(map)
    }

    /// Fields in tag order.
    pub fn fields(&self) -> impl Iterator<Item = &WireField> {
        self.fields.values()
    }

    pub fn field(&self, read_tag: u32) -> Option<&WireField> {
        self.fields.get(&read_tag)
    }

    /// The group folded in at the given parent tag.
    pub fn group(&self, parent_tag: u32) -> Option<(&WireField, &WireMap)> {
        match self.fields.get(&nested_tag(parent_tag)) {
            Some(field) => match &field.kind {
                FieldKind::Group(nested) => Some((field, nested)),
                FieldKind::Leaf { .. } => None,
            },
            None => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn fold_columns(&mut self, table: &Table) -> Result<()> {
        for column in &table.columns {
            if column.is_pseudo() {
                continue;
            }

            match column.parent_tag {
                None => self.insert_leaf(column)?,
                Some(parent_tag) => {
                    let attribute = column.parent_attribute.clone().ok_or_else(|| {
                        Error::schema(format!(
                            "column `{}.{}` has a parent tag but no parent attribute",
                            table.name, column.name
                        ))
                    })?;

                    self.embedded_group(parent_tag, attribute)?
                        .insert_leaf(column)?;
                }
            }
        }

        Ok(())
    }

    fn insert_leaf(&mut self, column: &Column) -> Result<()> {
        let tag = column.tag.ok_or_else(|| {
            Error::schema(format!("column `{}` has no wire tag", column.name))
        })?;
        let proto_ty = column.storage_ty.ok_or_else(|| {
            Error::schema(format!("column `{}` has no wire type", column.name))
        })?;

        let read_tag = proto_ty.make_tag(tag);
        let field = WireField {
            attribute: column.wire_name().to_string(),
            write_tag: tag,
            read_tag,
            kind: FieldKind::Leaf {
                proto_ty,
                runtime_ty: column.ty.item_ty().clone(),
                repeated: column.ty.is_list(),
            },
        };

        if self.fields.insert(read_tag, field).is_some() {
            return Err(Error::schema(format!(
                "tag {tag} assigned twice at the same message level (column `{}`)",
                column.name
            )));
        }

        Ok(())
    }

    fn insert_group(&mut self, parent_tag: u32, attribute: String, nested: Self) -> Result<()> {
        let read_tag = nested_tag(parent_tag);
        let field = WireField {
            attribute: attribute.clone(),
            write_tag: parent_tag,
            read_tag,
            kind: FieldKind::Group(nested),
        };

        if self.fields.insert(read_tag, field).is_some() {
            return Err(Error::schema(format!(
                "tag {parent_tag} assigned twice at the same message level (group `{attribute}`)"
            )));
        }

        Ok(())
    }

    /// Get or create the group node for an embedded message field.
    fn embedded_group(&mut self, parent_tag: u32, attribute: String) -> Result<&mut Self> {
        let read_tag = nested_tag(parent_tag);
        let field = self.fields.entry(read_tag).or_insert_with(|| WireField {
            attribute,
            write_tag: parent_tag,
            read_tag,
            kind: FieldKind::Group(Self::default()),
        });

        match &mut field.kind {
            FieldKind::Group(nested) => Ok(nested),
            FieldKind::Leaf { .. } => Err(Error::schema(format!(
                "tag {parent_tag} used both as a leaf and as a group"
            ))),
        }
    }
}

impl WireField {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, FieldKind::Group(_))
    }
}

/// The attribute name a merged or embedded child group is stored under.
pub fn group_attribute(child: &Table) -> &str {
    child
        .parent_attribute
        .as_deref()
        .unwrap_or_else(|| child.message_name())
}

/// The `/`-separated document attribute path of a column, as recorded in
/// the projected attribute list and used to address values in a decoded
/// [`Document`].
///
/// Top-level columns map to their wire name, embedded columns are qualified
/// by the embedding field's attribute, and columns of a merged table are
/// qualified by the group attribute their rows are folded under. Tags and
/// names are scoped per nesting level, so identical names or tag numbers in
/// sibling groups never collide.
///
/// [`Document`]: crate::Document
pub fn attribute_path(schema: &Schema, column: &Column) -> String {
    let table = schema.table(column.id.table);
    let mut segments = Vec::with_capacity(3);

    if table.is_merged() {
        segments.push(group_attribute(table).to_string());
    }
    if let Some(parent) = &column.parent_attribute {
        segments.push(parent.clone());
    }
    segments.push(column.wire_name().to_string());

    segments.join("/")
}
