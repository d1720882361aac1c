use crate::{scope::normalize_pseudo, translate::TranslatedQuery, Translator};

use gridlink_core::{
    schema::{Column, Schema, Table},
    stmt::{self, Expr, Value},
    Error, Result,
};
use gridlink_wire::{group_attribute, Document};

/// Where an insert lands in the document tree.
pub(crate) enum InsertTarget {
    /// A new top-level document.
    Root,

    /// A new child appended under the named group of an existing parent
    /// document.
    Nested { group: String },
}

pub(crate) struct InsertPlan {
    /// The key the affected document is stored under. For nested inserts
    /// this is the parent document's identity.
    pub(crate) identity: Value,
    pub(crate) document: Document,
    pub(crate) target: InsertTarget,
    pub(crate) upsert: bool,
}

pub(crate) struct UpdatePlan {
    pub(crate) locate: TranslatedQuery,

    /// Attribute path -> new value, overlaid on every matched document.
    pub(crate) payload: Vec<(String, Value)>,

    /// Attribute holding the document identity.
    pub(crate) identity_attribute: String,
}

pub(crate) struct DeletePlan {
    pub(crate) locate: TranslatedQuery,
}

/// Resolve an INSERT (or UPSERT) into a ready-to-store document plus its
/// identity key.
pub(crate) fn plan_insert(schema: &Schema, insert: &stmt::Insert) -> Result<InsertPlan> {
    let working = schema.table(insert.table);
    let top = schema.merge_root(working)?;
    let nested = working.id != top.id;

    let mut document = Document::new(working.message_name());
    let mut identity = None;

    for (column_id, expr) in insert.columns.iter().zip(&insert.values) {
        let column = schema.column(*column_id);
        let value = resolve_literal(expr)?;

        if is_identity(schema, top, column)? {
            identity = Some(value.clone());
        }

        // Pseudo columns carry identity for join resolution only; they are
        // never stored.
        if !column.is_pseudo() {
            set_column(&mut document, column, value);
        }
    }

    for column in &working.columns {
        if let Some(default) = &column.default_value {
            if !column.is_pseudo() && !has_column(&document, column) {
                set_column(&mut document, column, default.clone());
            }
        }
    }

    let identity = identity.ok_or_else(|| {
        Error::mutation(format!(
            "insert into `{}` does not set the document identity",
            working.name
        ))
    })?;

    Ok(InsertPlan {
        identity,
        document,
        target: if nested {
            InsertTarget::Nested {
                group: group_attribute(working).to_string(),
            }
        } else {
            InsertTarget::Root
        },
        upsert: insert.upsert,
    })
}

pub(crate) fn plan_update(schema: &Schema, update: &stmt::Update) -> Result<UpdatePlan> {
    let working = schema.table(update.table);
    let top = schema.merge_root(working)?;
    if working.id != top.id {
        return Err(Error::unsupported(format!(
            "update of table `{}` merged into `{}`",
            working.name, top.name
        )));
    }

    let pk = primary_key(top)?;

    let mut payload = Vec::with_capacity(update.assignments.len());
    for assignment in &update.assignments {
        let column = schema.column(assignment.column);
        if !column.updatable {
            return Err(Error::unsupported(format!(
                "column `{}` is not updatable",
                column.name
            )));
        }
        let value = resolve_literal(&assignment.value)?;
        payload.push((gridlink_wire::attribute_path(schema, column), value));
    }

    Ok(UpdatePlan {
        locate: locate_query(schema, working, update.filter.clone(), false)?,
        payload,
        identity_attribute: pk.wire_name().to_string(),
    })
}

pub(crate) fn plan_delete(schema: &Schema, delete: &stmt::Delete) -> Result<DeletePlan> {
    let working = schema.table(delete.table);
    let top = schema.merge_root(working)?;
    if working.id != top.id {
        return Err(Error::unsupported(format!(
            "delete from table `{}` merged into `{}`",
            working.name, top.name
        )));
    }

    primary_key(top)?;

    Ok(DeletePlan {
        locate: locate_query(schema, working, delete.filter.clone(), true)?,
    })
}

/// The batched query used to enumerate the documents a mutation touches.
///
/// The key columns are always projected first; an update also projects every
/// other selectable column so that columns the statement does not assign keep
/// their stored values through the replace.
fn locate_query(
    schema: &Schema,
    table: &Table,
    filter: Option<Expr>,
    key_only: bool,
) -> Result<TranslatedQuery> {
    let mut select = stmt::Select::new(table.id, filter);
    if key_only {
        select = select.returning(Vec::<Expr>::new());
    } else {
        let columns: Vec<Expr> = table
            .columns
            .iter()
            .filter(|column| column.selectable && !column.is_pseudo())
            .map(Expr::from)
            .collect();
        select = select.returning(columns);
    }

    Translator::new(schema).translate_query(&stmt::Query::new(select), true)
}

fn primary_key(table: &Table) -> Result<&Column> {
    table.primary_key_column().ok_or_else(|| {
        Error::schema(format!("table `{}` has no document identity", table.name))
    })
}

/// Whether the column (directly or through a pseudo mirror) sets the
/// identity of the document the statement lands in.
fn is_identity(schema: &Schema, top: &Table, column: &Column) -> Result<bool> {
    if column.primary_key && column.id.table == top.id {
        return Ok(true);
    }
    if column.is_pseudo() {
        let normalized = normalize_pseudo(schema, column)?;
        return Ok(normalized.primary_key && normalized.id.table == top.id);
    }
    Ok(false)
}

fn resolve_literal(expr: &Expr) -> Result<Value> {
    match expr {
        Expr::Value(value) => Ok(value.clone()),
        Expr::List(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match item.as_value() {
                    Some(value) => values.push(value.clone()),
                    None => {
                        return Err(Error::unsupported(
                            "only literal values may appear in a mutation payload",
                        ))
                    }
                }
            }
            Ok(Value::List(values))
        }
        _ => Err(Error::unsupported(
            "only literal values may appear in a mutation payload",
        )),
    }
}

/// Place a column value at its spot in the document: top level for plain
/// columns, inside the (single) embedded child for inlined columns.
fn set_column(document: &mut Document, column: &Column, value: Value) {
    match &column.parent_attribute {
        Some(parent) => document.ensure_child(parent).set(column.wire_name(), value),
        None => document.set(column.wire_name(), value),
    }
}

fn has_column(document: &Document, column: &Column) -> bool {
    match &column.parent_attribute {
        Some(parent) => document
            .child_docs(parent)
            .first()
            .is_some_and(|child| child.has_property(column.wire_name())),
        None => document.has_property(column.wire_name()),
    }
}
