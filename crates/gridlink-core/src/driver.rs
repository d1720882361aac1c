mod row;
pub use row::Row;

use crate::{stmt::Value, Result};

/// Client for the remote document cache.
///
/// The core consumes this interface; connection management, retries and
/// pooling all live behind it. Calls are blocking: one statement occupies one
/// logical execution context end to end, and there is no internal threading.
pub trait StoreClient {
    /// Fetch the encoded document stored at `key`.
    fn get(&mut self, key: &Value) -> Result<Option<Vec<u8>>>;

    /// Store a new document at `key`.
    fn put(&mut self, key: &Value, bytes: Vec<u8>) -> Result<()>;

    /// Replace the document stored at `key`.
    fn replace(&mut self, key: &Value, bytes: Vec<u8>) -> Result<()>;

    /// Remove the document stored at `key`. Returns true if one existed.
    fn remove(&mut self, key: &Value) -> Result<bool>;

    /// Open a cursor over a filter query.
    ///
    /// The cursor is independent of the client handle; implementations share
    /// whatever connection state they need internally.
    fn query(&mut self, filter: &str) -> Result<Box<dyn QueryCursor>>;
}

/// A paged cursor over the rows matching a filter query.
///
/// Paging is pull-based: the caller positions the window with `set_offset` /
/// `set_max_results` and then calls `list`. The cursor is not seekable
/// backward; restarting means re-executing the query.
pub trait QueryCursor {
    /// Index of the first row the next `list` call returns.
    fn set_offset(&mut self, offset: u64);

    /// Maximum number of rows the next `list` call returns.
    fn set_max_results(&mut self, max_results: u64);

    /// Fetch the current window of rows.
    fn list(&mut self) -> Result<Vec<Row>>;

    /// Total number of rows matching the filter, independent of the current
    /// paging window. Valid after the first `list` call.
    fn result_size(&self) -> usize;
}
