#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

// Fragment serializers
mod expr;
mod query;
mod value;

pub(crate) use query::FilterQuery;

use crate::Scope;

/// Serialize a statement fragment into the store's filter-query text.
///
/// Literals are inlined rather than parameterized; the target grammar has no
/// placeholder syntax. Anything the grammar cannot express is recorded as a
/// problem instead of panicking, so that all of a statement's issues surface
/// in one translation error.
pub(crate) struct Serializer<'a> {
    /// Resolution context of the statement being serialized
    scope: &'a Scope<'a>,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized query text
    dst: &'a mut String,

    /// Problems found while serializing
    problems: &'a mut Vec<String>,
}

impl<'a> Serializer<'a> {
    pub(crate) fn new(scope: &'a Scope<'a>) -> Self {
        Self { scope }
    }

    pub(crate) fn serialize(&self, query: &FilterQuery<'_>, problems: &mut Vec<String>) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            problems,
        };

        query.to_sql(&mut fmt);
        ret
    }
}
