use super::{Expr, Returning, Source};

/// The body of a SELECT query.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The projection part of the query.
    pub returning: Returning,

    /// The `FROM` part: the table being selected, with any joins.
    pub source: Source,

    /// WHERE
    pub filter: Option<Expr>,

    /// GROUP BY
    pub group_by: Vec<Expr>,

    /// HAVING
    pub having: Option<Expr>,
}

impl Select {
    pub fn new(source: impl Into<Source>, filter: Option<Expr>) -> Self {
        Self {
            returning: Returning::Star,
            source: source.into(),
            filter,
            group_by: vec![],
            having: None,
        }
    }

    pub fn returning(mut self, returning: impl Into<Returning>) -> Self {
        self.returning = returning.into();
        self
    }

    pub fn add_filter(&mut self, filter: impl Into<Expr>) {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and(existing, filter.into()),
            None => filter.into(),
        });
    }
}
