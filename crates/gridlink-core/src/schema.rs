mod column;
pub use column::{Column, ColumnId};

mod proto_type;
pub use proto_type::{
    nested_tag, ProtoType, WIRETYPE_FIXED32, WIRETYPE_FIXED64, WIRETYPE_LENGTH_DELIMITED,
    WIRETYPE_VARINT,
};

#[allow(clippy::module_inception)]
mod schema;
pub use schema::Schema;

mod table;
pub use table::{Table, TableId};
