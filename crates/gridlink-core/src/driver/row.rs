use crate::stmt::Value;

/// One result row as returned by the store.
///
/// Scalar projections come back as flat tuples; queries without a projection
/// return the whole document as opaque bytes for the codec to decode.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Tuple(Vec<Value>),
    Document(Vec<u8>),
}

impl Row {
    pub fn expect_tuple(self) -> Vec<Value> {
        match self {
            Self::Tuple(values) => values,
            Self::Document(_) => panic!("expected `Tuple`, found `Document`"),
        }
    }
}
