use super::{Comma, Formatter, ToSql};

use gridlink_core::stmt;

/// The clauses of one filter query, ready to serialize.
///
/// `projection` is `None` when the whole document must be fetched; the store
/// then returns opaque document bytes instead of tuples. LIMIT and OFFSET are
/// never part of the text; paging is driven through the store cursor.
pub(crate) struct FilterQuery<'a> {
    pub(crate) projection: Option<&'a [stmt::Expr]>,
    pub(crate) filter: Option<&'a stmt::Expr>,
    pub(crate) group_by: &'a [stmt::Expr],
    pub(crate) having: Option<&'a stmt::Expr>,
    pub(crate) order_by: Option<&'a stmt::OrderBy>,
}

impl ToSql for &FilterQuery<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(projection) = self.projection {
            let columns = Comma(projection);
            fmt!(f, "SELECT " columns " ");
        }

        let scope = f.serializer.scope;
        fmt!(f, "FROM " scope.top.message_name());
        if let Some(alias) = scope.alias {
            fmt!(f, " " alias);
        }

        if let Some(filter) = self.filter {
            fmt!(f, " WHERE " filter);
        }

        if !self.group_by.is_empty() {
            let exprs = Comma(self.group_by);
            fmt!(f, " GROUP BY " exprs);
        }

        if let Some(having) = self.having {
            fmt!(f, " HAVING " having);
        }

        if let Some(order_by) = self.order_by {
            fmt!(f, " " order_by);
        }
    }
}
