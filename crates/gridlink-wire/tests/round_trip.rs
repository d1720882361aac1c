mod support;

use gridlink_core::stmt::Value;
use gridlink_wire::{Document, TableCodec};

use pretty_assertions::assert_eq;

fn codec(schema: &gridlink_core::Schema, table: &str) -> TableCodec {
    let table = schema.table_by_name(table).unwrap();
    TableCodec::new(schema, table).unwrap()
}

#[test]
fn flat_document_round_trip() {
    let schema = support::scalar_schema();
    let codec = codec(&schema, "G1");

    let mut doc = Document::new("G1");
    doc.set("e1", Value::I32(25));
    doc.set("e2", Value::String("hello".to_string()));
    doc.set("e3", Value::F32(1.5));
    doc.set("e4", Value::F64(-2.25));
    doc.set("e5", Value::I64(-42));
    doc.set("born", Value::Timestamp(1_600_000_000_000));
    doc.set("balance", Value::Decimal(vec![0x01, 0x00]));
    doc.set(
        "tags",
        Value::List(vec![
            Value::String("a".to_string()),
            Value::String("b".to_string()),
        ]),
    );

    let bytes = codec.encode(&doc).unwrap();
    let decoded = codec.decode(&bytes).unwrap();

    assert_eq!(doc.properties(), decoded.properties());
}

#[test]
fn absent_and_null_attributes_are_skipped() {
    let schema = support::scalar_schema();
    let codec = codec(&schema, "G1");

    let mut doc = Document::new("G1");
    doc.set("e1", Value::I32(1));
    doc.set("e2", Value::Null);

    let bytes = codec.encode(&doc).unwrap();
    let decoded = codec.decode(&bytes).unwrap();

    assert_eq!(decoded.property("e1"), &Value::I32(1));
    assert!(!decoded.has_property("e2"));
    assert_eq!(decoded.property("e2"), &Value::Null);
}

#[test]
fn nested_children_round_trip() {
    let schema = support::nested_schema();
    let codec = codec(&schema, "G2");

    let mut doc = Document::new("G2");
    doc.set("e1", Value::I32(1));
    doc.set("e2", Value::String("one".to_string()));

    let mut g3 = Document::new("g3");
    g3.set("e1", Value::I32(10));
    g3.set("e2", Value::String("embedded".to_string()));
    doc.add_child("g3", g3);

    for (e1, e2) in [(100, "first"), (200, "second")] {
        let mut child = Document::new("g4");
        child.set("e1", Value::I32(e1));
        child.set("e2", Value::String(e2.to_string()));
        doc.add_child("g4", child);
    }

    let bytes = codec.encode(&doc).unwrap();
    let decoded = codec.decode(&bytes).unwrap();

    assert_eq!(decoded.property("e1"), &Value::I32(1));
    assert_eq!(decoded.child_docs("g4").len(), 2);
    assert_eq!(decoded.child_docs("g4")[1].property("e1"), &Value::I32(200));
    assert_eq!(
        decoded.value_at("g3/e2").unwrap(),
        &Value::String("embedded".to_string())
    );
}

#[test]
fn sibling_groups_do_not_cross_assign_tags() {
    // `g3` and `g4` both use tags 1 and 2, as does the top level. Values
    // must come back exactly where they were put.
    let schema = support::nested_schema();
    let codec = codec(&schema, "G2");

    let mut doc = Document::new("G2");
    doc.set("e1", Value::I32(1));

    let mut g3 = Document::new("g3");
    g3.set("e1", Value::I32(2));
    doc.add_child("g3", g3);

    let mut g4 = Document::new("g4");
    g4.set("e1", Value::I32(3));
    doc.add_child("g4", g4);

    let decoded = codec.decode(&codec.encode(&doc).unwrap()).unwrap();

    assert_eq!(decoded.property("e1"), &Value::I32(1));
    assert_eq!(decoded.value_at("g3/e1").unwrap(), &Value::I32(2));
    assert_eq!(decoded.value_at("g4/e1").unwrap(), &Value::I32(3));
}

#[test]
fn unknown_tag_is_a_hard_error() {
    let schema = support::scalar_schema();
    let codec = codec(&schema, "G1");

    // Field number 15 is not part of the schema: varint key 15<<3 | 0.
    let bytes = vec![0x78, 0x01];
    let err = codec.decode(&bytes).unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err}");
}

#[test]
fn truncated_buffer_is_a_framing_error() {
    let schema = support::scalar_schema();
    let codec = codec(&schema, "G1");

    let mut doc = Document::new("G1");
    doc.set("e2", Value::String("hello".to_string()));
    let mut bytes = codec.encode(&doc).unwrap();
    bytes.truncate(bytes.len() - 2);

    assert!(codec.decode(&bytes).unwrap_err().is_decode());
}

#[test]
fn timestamp_encodes_as_big_endian_millis() {
    let schema = support::scalar_schema();
    let codec = codec(&schema, "G1");

    let mut doc = Document::new("G1");
    doc.set("born", Value::Timestamp(0x0102_0304_0506_0708));
    let bytes = codec.encode(&doc).unwrap();

    // key (6 << 3 | 2), length 8, then the millis big-endian.
    assert_eq!(
        bytes,
        vec![0x32, 0x08, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
    );
}

#[test]
fn flatten_expands_one_row_per_child() {
    let schema = support::nested_schema();
    let codec = codec(&schema, "G2");

    let mut doc = Document::new("G2");
    doc.set("e1", Value::I32(1));
    for e1 in [10, 20] {
        let mut child = Document::new("g4");
        child.set("e1", Value::I32(e1));
        doc.add_child("g4", child);
    }

    let decoded = codec.decode(&codec.encode(&doc).unwrap()).unwrap();
    let paths = vec!["e1".to_string(), "g4/e1".to_string()];
    let rows = decoded.flatten(&paths).unwrap();

    assert_eq!(
        rows,
        vec![
            vec![Value::I32(1), Value::I32(10)],
            vec![Value::I32(1), Value::I32(20)],
        ]
    );
}

#[test]
fn repeated_field_round_trips_on_its_own() {
    let schema = support::scalar_schema();
    let codec = codec(&schema, "G1");

    let mut doc = Document::new("G1");
    doc.set(
        "tags",
        Value::List(vec![Value::from("a"), Value::from("b")]),
    );

    let bytes = codec.encode(&doc).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(
        codec.decode(&bytes).unwrap().property("tags"),
        &Value::List(vec![Value::from("a"), Value::from("b")])
    );
}

#[test]
fn flatten_crosses_distinct_groups() {
    let mut doc = Document::new("G2");
    doc.set("e1", Value::I32(1));

    let mut g3 = Document::new("g3");
    g3.set("e1", Value::I32(7));
    doc.add_child("g3", g3);

    for e1 in [10, 20] {
        let mut child = Document::new("g4");
        child.set("e1", Value::I32(e1));
        doc.add_child("g4", child);
    }

    let paths = vec![
        "e1".to_string(),
        "g3/e1".to_string(),
        "g4/e1".to_string(),
    ];
    assert_eq!(
        doc.flatten(&paths).unwrap(),
        vec![
            vec![Value::I32(1), Value::I32(7), Value::I32(10)],
            vec![Value::I32(1), Value::I32(7), Value::I32(20)],
        ]
    );
}

#[test]
fn flatten_with_no_children_yields_no_rows() {
    let mut doc = Document::new("G2");
    doc.set("e1", Value::I32(1));

    let paths = vec!["e1".to_string(), "g4/e1".to_string()];
    assert_eq!(doc.flatten(&paths).unwrap(), Vec::<Vec<Value>>::new());
}
