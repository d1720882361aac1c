use crate::mutation::{self, DeletePlan, InsertPlan, InsertTarget, UpdatePlan};

use gridlink_core::{
    driver::Row,
    schema::{Schema, Table},
    stmt, Error, Result, StoreClient,
};
use gridlink_wire::{Document, TableCodec};

use tracing::debug;

/// Runs one INSERT, UPDATE, DELETE or UPSERT against the store.
///
/// Every mutation is a read-then-patch on whole documents: inserts construct
/// a fresh document, updates and deletes enumerate matching documents in
/// batches through a locate query and patch or remove each one at its
/// identity key.
pub struct UpdateExecution<'a> {
    schema: &'a Schema,
    client: &'a mut dyn StoreClient,
    batch_size: u64,
}

impl<'a> UpdateExecution<'a> {
    pub fn new(schema: &'a Schema, client: &'a mut dyn StoreClient, batch_size: u64) -> Self {
        Self {
            schema,
            client,
            batch_size,
        }
    }

    /// Execute the statement and return the number of affected documents.
    pub fn execute(&mut self, statement: &stmt::Statement) -> Result<u64> {
        match statement {
            stmt::Statement::Insert(insert) => {
                let top = self.schema.merge_root(self.schema.table(insert.table))?;
                let plan = mutation::plan_insert(self.schema, insert)?;
                self.execute_insert(top, plan)
            }
            stmt::Statement::Update(update) => {
                let top = self.schema.merge_root(self.schema.table(update.table))?;
                let plan = mutation::plan_update(self.schema, update)?;
                self.execute_update(top, plan)
            }
            stmt::Statement::Delete(delete) => {
                let plan = mutation::plan_delete(self.schema, delete)?;
                self.execute_delete(plan)
            }
            stmt::Statement::Query(_) => Err(Error::unsupported(
                "a SELECT cannot be executed as a mutation",
            )),
        }
    }

    fn execute_insert(&mut self, top: &Table, plan: InsertPlan) -> Result<u64> {
        let codec = TableCodec::new(self.schema, top)?;

        match plan.target {
            InsertTarget::Root => {
                let previous = self.client.get(&plan.identity)?;
                match previous {
                    None => {
                        self.client.put(&plan.identity, codec.encode(&plan.document)?)?;
                    }
                    Some(bytes) if plan.upsert => {
                        let mut stored = codec.decode(&bytes)?;
                        merge_into(&mut stored, &plan.document);
                        self.client.put(&plan.identity, codec.encode(&stored)?)?;
                    }
                    Some(_) => {
                        return Err(Error::mutation(format!(
                            "`{}` already holds a document with identity {:?}",
                            top.name, plan.identity
                        )));
                    }
                }
            }
            InsertTarget::Nested { group } => {
                let bytes = self.client.get(&plan.identity)?.ok_or_else(|| {
                    Error::mutation(format!(
                        "no parent document in `{}` with identity {:?}",
                        top.name, plan.identity
                    ))
                })?;
                let mut parent = codec.decode(&bytes)?;
                parent.add_child(group, plan.document);
                self.client.replace(&plan.identity, codec.encode(&parent)?)?;
            }
        }

        Ok(1)
    }

    fn execute_update(&mut self, top: &Table, plan: UpdatePlan) -> Result<u64> {
        let codec = TableCodec::new(self.schema, top)?;
        debug!(query = %plan.locate.text, "update locate query");

        let mut count = 0;
        self.for_each_batch(&plan.locate.text, |client, rows| {
            for row in rows {
                let mut document = match row {
                    Row::Tuple(values) => {
                        let mut document = Document::new(top.message_name());
                        for (path, value) in plan.locate.attribute_paths.iter().zip(values) {
                            document.set_at(path, value);
                        }
                        document
                    }
                    Row::Document(bytes) => codec.decode(&bytes)?,
                };

                for (path, value) in &plan.payload {
                    document.set_at(path, value.clone());
                }

                let identity = document.property(&plan.identity_attribute).clone();
                if identity.is_null() {
                    return Err(Error::mutation(format!(
                        "matched document in `{}` is missing its identity",
                        top.name
                    )));
                }

                client.replace(&identity, codec.encode(&document)?)?;
                count += 1;
            }
            Ok(())
        })?;

        Ok(count)
    }

    fn execute_delete(&mut self, plan: DeletePlan) -> Result<u64> {
        debug!(query = %plan.locate.text, "delete locate query");

        let mut count = 0;
        self.for_each_batch(&plan.locate.text, |client, rows| {
            for row in rows {
                let identity = match row {
                    Row::Tuple(mut values) if !values.is_empty() => values.swap_remove(0),
                    _ => {
                        return Err(Error::decode(
                            "delete locate query returned a row without a key",
                        ))
                    }
                };
                if client.remove(&identity)? {
                    count += 1;
                }
            }
            Ok(())
        })?;

        Ok(count)
    }

    /// Enumerate the locate query's rows in fixed-size batches.
    ///
    /// Termination is defined by the fetch itself: the loop stops when a
    /// fetch returns fewer rows than requested, never by a separate count
    /// call that could race with concurrent writes.
    fn for_each_batch(
        &mut self,
        filter: &str,
        mut task: impl FnMut(&mut dyn StoreClient, Vec<Row>) -> Result<()>,
    ) -> Result<()> {
        let mut cursor = self.client.query(filter)?;
        let mut offset = 0;

        loop {
            cursor.set_offset(offset);
            cursor.set_max_results(self.batch_size);
            let rows = cursor.list()?;
            let fetched = rows.len() as u64;
            debug!(offset, rows = fetched, "mutation batch");

            task(self.client, rows)?;

            if fetched < self.batch_size {
                return Ok(());
            }
            offset += self.batch_size;
        }
    }
}

/// Overlay an upsert payload on a stored document: named attributes are
/// replaced, child documents are appended, everything else is untouched.
fn merge_into(stored: &mut Document, payload: &Document) {
    for (attribute, value) in payload.properties() {
        stored.set(attribute.clone(), value.clone());
    }
    for (attribute, children) in payload.children() {
        for child in children {
            stored.add_child(attribute.clone(), child.clone());
        }
    }
}
