#![allow(dead_code)]

use gridlink_core::{
    driver::{QueryCursor, Row},
    schema::{Column, ColumnId, ProtoType, Schema, Table, TableId},
    stmt::{Type, Value},
    Result, StoreClient,
};

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

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

/// One flat table `G1` with a key column, scalars of each numeric width and
/// a defaulted column.
pub fn scalar_schema() -> Schema {
    let g1 = TableId(0);

    let mut e1 = column(g1, 0, "e1", Type::I32, ProtoType::Int32, 1);
    e1.primary_key = true;
    e1.nullable = false;

    let mut e5 = column(g1, 4, "e5", Type::I64, ProtoType::Int64, 5);
    e5.default_value = Some(Value::I64(0));

    Schema {
        tables: vec![table(
            g1,
            "G1",
            vec![
                e1,
                column(g1, 1, "e2", Type::String, ProtoType::String, 2),
                column(g1, 2, "e3", Type::F32, ProtoType::Float, 3),
                column(g1, 3, "e4", Type::F64, ProtoType::Double, 4),
                e5,
            ],
        )],
    }
}

/// `G2` with an embedded `g3` message, the child table `G4` folded into its
/// documents under the `g4` group, and an unrelated standalone table `G5`.
pub fn nested_schema() -> Schema {
    let g2 = TableId(0);
    let g4 = TableId(1);
    let g5 = TableId(2);

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

    let mut g5_e1 = column(g5, 0, "e1", Type::I32, ProtoType::Int32, 1);
    g5_e1.primary_key = true;

    Schema {
        tables: vec![table_g2, table_g4, table(g5, "G5", vec![g5_e1])],
    }
}

/// In-memory stand-in for the remote cache.
///
/// Documents live in a key-value map; filter queries return a configured
/// row set, windowed by offset and max-results the way the remote cursor
/// windows its hits. Query texts and fetch counts are recorded for
/// assertions.
pub struct FakeStore {
    docs: Rc<RefCell<BTreeMap<String, Vec<u8>>>>,
    results: Rc<RefCell<Vec<Row>>>,
    pub queries: Rc<RefCell<Vec<String>>>,
    pub fetches: Rc<RefCell<u64>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            docs: Rc::default(),
            results: Rc::default(),
            queries: Rc::default(),
            fetches: Rc::default(),
        }
    }

    pub fn with_results(results: Vec<Row>) -> Self {
        let store = Self::new();
        *store.results.borrow_mut() = results;
        store
    }

    pub fn insert_doc(&self, key: &Value, bytes: Vec<u8>) {
        self.docs.borrow_mut().insert(doc_key(key), bytes);
    }

    pub fn doc(&self, key: &Value) -> Option<Vec<u8>> {
        self.docs.borrow().get(&doc_key(key)).cloned()
    }

    pub fn doc_count(&self) -> usize {
        self.docs.borrow().len()
    }

    pub fn last_query(&self) -> String {
        self.queries.borrow().last().cloned().unwrap_or_default()
    }

    pub fn fetches(&self) -> u64 {
        *self.fetches.borrow()
    }
}

fn doc_key(key: &Value) -> String {
    format!("{key:?}")
}

impl StoreClient for FakeStore {
    fn get(&mut self, key: &Value) -> Result<Option<Vec<u8>>> {
        Ok(self.docs.borrow().get(&doc_key(key)).cloned())
    }

    fn put(&mut self, key: &Value, bytes: Vec<u8>) -> Result<()> {
        self.docs.borrow_mut().insert(doc_key(key), bytes);
        Ok(())
    }

    fn replace(&mut self, key: &Value, bytes: Vec<u8>) -> Result<()> {
        self.docs.borrow_mut().insert(doc_key(key), bytes);
        Ok(())
    }

    fn remove(&mut self, key: &Value) -> Result<bool> {
        Ok(self.docs.borrow_mut().remove(&doc_key(key)).is_some())
    }

    fn query(&mut self, filter: &str) -> Result<Box<dyn QueryCursor>> {
        self.queries.borrow_mut().push(filter.to_string());
        Ok(Box::new(FakeCursor {
            rows: self.results.borrow().clone(),
            offset: 0,
            max_results: 0,
            fetches: Rc::clone(&self.fetches),
        }))
    }
}

pub struct FakeCursor {
    rows: Vec<Row>,
    offset: u64,
    max_results: u64,
    fetches: Rc<RefCell<u64>>,
}

impl QueryCursor for FakeCursor {
    fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    fn set_max_results(&mut self, max_results: u64) {
        self.max_results = max_results;
    }

    fn list(&mut self) -> Result<Vec<Row>> {
        *self.fetches.borrow_mut() += 1;
        let start = (self.offset as usize).min(self.rows.len());
        let end = start
            .saturating_add(self.max_results as usize)
            .min(self.rows.len());
        Ok(self.rows[start..end].to_vec())
    }

    fn result_size(&self) -> usize {
        self.rows.len()
    }
}
