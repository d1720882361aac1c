use gridlink_core::{
    driver::{QueryCursor, Row},
    stmt::Value,
    Result,
};
use gridlink_wire::TableCodec;

use std::collections::VecDeque;

use tracing::debug;

/// Pull-based pager over a store cursor.
///
/// Rows are fetched in batches of `min(batch_size, remaining limit)` and
/// handed out one at a time; the pager is not seekable backward, restarting
/// means re-executing the query. Document rows are decoded through the codec
/// and flattened along the projected attribute paths; tuple rows pass through
/// unchanged. Cancellation is cooperative and takes effect before the next
/// batch is issued.
pub struct Pager {
    cursor: Box<dyn QueryCursor>,
    codec: TableCodec,
    attribute_paths: Vec<String>,
    batch_size: u64,
    offset: u64,
    limit: Option<u64>,
    last_batch: bool,
    cancelled: bool,
    pending: VecDeque<Vec<Value>>,
}

impl Pager {
    pub(crate) fn new(
        cursor: Box<dyn QueryCursor>,
        codec: TableCodec,
        attribute_paths: Vec<String>,
        batch_size: u64,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Self {
        Self {
            cursor,
            codec,
            attribute_paths,
            batch_size,
            offset: offset.unwrap_or(0),
            limit,
            last_batch: false,
            cancelled: false,
            pending: VecDeque::new(),
        }
    }

    /// The next result row, or `None` at end of stream.
    pub fn next_row(&mut self) -> Result<Option<Vec<Value>>> {
        loop {
            if let Some(row) = self.pending.pop_front() {
                return Ok(Some(row));
            }
            if self.last_batch || self.cancelled {
                return Ok(None);
            }
            self.fetch_next_batch()?;
        }
    }

    /// Stop paging; the current batch is discarded and no further store
    /// calls are made.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.pending.clear();
    }

    fn fetch_next_batch(&mut self) -> Result<()> {
        let mut fetch = self.batch_size;
        if let Some(limit) = self.limit {
            if limit <= fetch {
                fetch = limit;
                self.last_batch = true;
            }
            self.limit = Some(limit - fetch);
        }

        if fetch == 0 {
            self.last_batch = true;
            return Ok(());
        }

        self.cursor.set_offset(self.offset);
        self.cursor.set_max_results(fetch);
        let rows = self.cursor.list()?;
        debug!(offset = self.offset, rows = rows.len(), "fetched batch");

        self.offset += fetch;
        if (rows.len() as u64) < fetch || self.offset >= self.cursor.result_size() as u64 {
            self.last_batch = true;
        }

        for row in rows {
            match row {
                Row::Tuple(values) => self.pending.push_back(values),
                Row::Document(bytes) => {
                    let document = self.codec.decode(&bytes)?;
                    self.pending
                        .extend(document.flatten(&self.attribute_paths)?);
                }
            }
        }

        Ok(())
    }
}
