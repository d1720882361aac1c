mod support;

use gridlink_core::{
    schema::{nested_tag, ProtoType},
    stmt::Type,
};
use gridlink_wire::{attribute_path, WireMap};

use pretty_assertions::assert_eq;

#[test]
fn folds_embedded_and_merged_groups() {
    let schema = support::nested_schema();
    let top = schema.table_by_name("G2").unwrap();
    let map = WireMap::build(&schema, top).unwrap();

    // Top-level leaves plus the two groups.
    assert!(map.field(ProtoType::Int32.make_tag(1)).is_some());
    assert!(map.field(ProtoType::String.make_tag(2)).is_some());

    let (field, g3) = map.group(5).unwrap();
    assert_eq!(field.attribute, "g3");
    assert!(g3.field(ProtoType::Int32.make_tag(1)).is_some());

    let (field, g4) = map.group(6).unwrap();
    assert_eq!(field.attribute, "g4");
    assert!(g4.field(ProtoType::String.make_tag(2)).is_some());

    // Pseudo columns never reach the wire.
    assert_eq!(g4.fields().count(), 2);
}

#[test]
fn duplicate_tag_fails_at_build_time() {
    let mut schema = support::scalar_schema();
    schema.tables[0].columns[1].tag = Some(1);
    schema.tables[0].columns[1].storage_ty = Some(ProtoType::Int32);

    let top = schema.table_by_name("G1").unwrap();
    let err = WireMap::build(&schema, top).unwrap_err();
    assert!(err.is_schema(), "unexpected error: {err}");
}

#[test]
fn missing_tag_fails_at_build_time() {
    let mut schema = support::scalar_schema();
    schema.tables[0].columns[1].tag = None;

    let top = schema.table_by_name("G1").unwrap();
    assert!(WireMap::build(&schema, top).unwrap_err().is_schema());
}

#[test]
fn repeated_leaves_carry_their_item_type() {
    let schema = support::scalar_schema();
    let top = schema.table_by_name("G1").unwrap();
    let map = WireMap::build(&schema, top).unwrap();

    let field = map.field(ProtoType::String.make_tag(8)).unwrap();
    match &field.kind {
        gridlink_wire::FieldKind::Leaf {
            runtime_ty,
            repeated,
            ..
        } => {
            assert_eq!(runtime_ty, &Type::String);
            assert!(repeated);
        }
        other => panic!("expected a leaf, found {other:?}"),
    }
}

#[test]
fn nested_tag_matches_group_read_tags() {
    let schema = support::nested_schema();
    let top = schema.table_by_name("G2").unwrap();
    let map = WireMap::build(&schema, top).unwrap();

    let (field, _) = map.group(6).unwrap();
    assert_eq!(field.read_tag, nested_tag(6));
    assert_eq!(field.write_tag, 6);
}

#[test]
fn attribute_paths_qualify_by_nesting() {
    let schema = support::nested_schema();
    let g2 = schema.table_by_name("G2").unwrap();
    let g4 = schema.table_by_name("G4").unwrap();

    assert_eq!(attribute_path(&schema, &g2.columns[0]), "e1");
    assert_eq!(attribute_path(&schema, &g2.columns[2]), "g3/e1");
    assert_eq!(attribute_path(&schema, &g4.columns[0]), "g4/e1");
}
