use gridlink_core::{
    schema::{Column, ColumnId, ProtoType, Schema, Table, TableId},
    stmt::Type,
};

/// A column with wire metadata and unremarkable relational flags.
pub fn column(
    table: TableId,
    index: usize,
    name: &str,
    ty: Type,
    storage_ty: ProtoType,
    tag: u32,
) -> Column {
    Column {
        id: ColumnId { table, index },
        name: name.to_string(),
        ty,
        storage_ty: Some(storage_ty),
        nullable: true,
        selectable: true,
        updatable: true,
        default_value: None,
        primary_key: false,
        tag: Some(tag),
        parent_tag: None,
        parent_attribute: None,
        message_name: None,
        pseudo: None,
        name_in_source: None,
    }
}

pub fn table(id: TableId, name: &str, columns: Vec<Column>) -> Table {
    let primary_key = columns
        .iter()
        .find(|column| column.primary_key)
        .map(|column| column.id);
    Table {
        id,
        name: name.to_string(),
        columns,
        primary_key,
        message_name: None,
        merge_into: None,
        parent_tag: None,
        parent_attribute: None,
    }
}

/// Two document types: `G2` with an embedded `g3` message and a one-to-many
/// child table `G4` folded into it.
///
/// The embedded `g3` message and the `g4` group both reuse tag numbers `1`
/// and `2` at their own nesting level, the same numbers the top-level `e1`
/// and `e2` fields use.
pub fn nested_schema() -> Schema {
    let g2 = TableId(0);
    let g4 = TableId(1);

    let mut e1 = column(g2, 0, "e1", Type::I32, ProtoType::Int32, 1);
    e1.primary_key = true;
    e1.nullable = false;

    let mut g3_e1 = column(g2, 2, "g3_e1", Type::I32, ProtoType::Int32, 1);
    g3_e1.parent_tag = Some(5);
    g3_e1.parent_attribute = Some("g3".to_string());
    g3_e1.name_in_source = Some("e1".to_string());

    let mut g3_e2 = column(g2, 3, "g3_e2", Type::String, ProtoType::String, 2);
    g3_e2.parent_tag = Some(5);
    g3_e2.parent_attribute = Some("g3".to_string());
    g3_e2.name_in_source = Some("e2".to_string());

    let mut table_g2 = table(
        g2,
        "G2",
        vec![
            e1,
            column(g2, 1, "e2", Type::String, ProtoType::String, 2),
            g3_e1,
            g3_e2,
        ],
    );
    table_g2.message_name = Some("G2".to_string());

    let mut pseudo = column(g4, 2, "G2_e1", Type::I32, ProtoType::Int32, 0);
    pseudo.storage_ty = None;
    pseudo.tag = None;
    pseudo.pseudo = Some("g4".to_string());
    pseudo.name_in_source = Some("e1".to_string());

    let mut table_g4 = table(
        g4,
        "G4",
        vec![
            column(g4, 0, "e1", Type::I32, ProtoType::Int32, 1),
            column(g4, 1, "e2", Type::String, ProtoType::String, 2),
            pseudo,
        ],
    );
    table_g4.merge_into = Some("G2".to_string());
    table_g4.parent_tag = Some(6);
    table_g4.parent_attribute = Some("g4".to_string());

    Schema {
        tables: vec![table_g2, table_g4],
    }
}

/// A single flat table exercising every scalar wire encoding.
pub fn scalar_schema() -> Schema {
    let g1 = TableId(0);

    let mut e1 = column(g1, 0, "e1", Type::I32, ProtoType::Int32, 1);
    e1.primary_key = true;
    e1.nullable = false;

    let tags = column(g1, 7, "tags", Type::list(Type::String), ProtoType::String, 8);

    Schema {
        tables: vec![table(
            g1,
            "G1",
            vec![
                e1,
                column(g1, 1, "e2", Type::String, ProtoType::String, 2),
                column(g1, 2, "e3", Type::F32, ProtoType::Float, 3),
                column(g1, 3, "e4", Type::F64, ProtoType::Double, 4),
                column(g1, 4, "e5", Type::I64, ProtoType::SInt64, 5),
                column(g1, 5, "born", Type::Timestamp, ProtoType::Bytes, 6),
                column(g1, 6, "balance", Type::Decimal, ProtoType::Bytes, 7),
                tags,
            ],
        )],
    }
}
