use crate::{Pager, Translator};

use gridlink_core::{
    schema::Schema,
    stmt::{self, Expr, Value},
    Result, StoreClient,
};
use gridlink_wire::TableCodec;

use tracing::debug;

/// Runs one SELECT against the store and pages out its rows.
///
/// Translation happens up front, before any store I/O; the codec for the
/// resolved root table is built here and handed to the pager explicitly.
pub struct QueryExecution {
    pager: Pager,
}

impl QueryExecution {
    pub fn new(
        schema: &Schema,
        query: &stmt::Query,
        client: &mut dyn StoreClient,
        batch_size: u64,
    ) -> Result<Self> {
        // Key forcing only makes sense for row projections; aggregate and
        // grouped results are computed tuples with no document identity.
        let include_pk = query.body.group_by.is_empty() && !has_aggregate(&query.body.returning);

        let translated = Translator::new(schema).translate_query(query, include_pk)?;
        debug!(query = %translated.text, "source query");

        let working = schema.table(query.body.source.table);
        let top = schema.merge_root(working)?;
        let codec = TableCodec::new(schema, top)?;

        let cursor = client.query(&translated.text)?;

        Ok(Self {
            pager: Pager::new(
                cursor,
                codec,
                translated.attribute_paths,
                batch_size,
                translated.limit,
                translated.offset,
            ),
        })
    }

    /// The next result row, or `None` at end of stream.
    pub fn next_row(&mut self) -> Result<Option<Vec<Value>>> {
        self.pager.next_row()
    }

    /// Cooperatively stop paging before the next batch.
    pub fn cancel(&mut self) {
        self.pager.cancel();
    }
}

fn has_aggregate(returning: &stmt::Returning) -> bool {
    match returning {
        stmt::Returning::Star => false,
        stmt::Returning::Expr(exprs) => exprs.iter().any(|expr| matches!(expr, Expr::Func(_))),
    }
}
