use super::{Expr, Limit, OrderBy, Select, Source};

/// A SELECT query: body plus ORDER BY and LIMIT/OFFSET.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The body of the query.
    pub body: Select,

    /// ORDER BY
    pub order_by: Option<OrderBy>,

    /// LIMIT and OFFSET
    pub limit: Option<Limit>,
}

impl Query {
    pub fn new(body: Select) -> Self {
        Self {
            body,
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(source: impl Into<Source>, filter: impl Into<Expr>) -> Self {
        Self::new(Select::new(source, Some(filter.into())))
    }

    pub fn order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Self::new(value)
    }
}
