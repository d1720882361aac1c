use super::Expr;
use crate::schema::ColumnId;

/// A single SET clause of an UPDATE or one column of an INSERT payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: ColumnId,
    pub value: Expr,
}

/// The ordered SET clauses of an UPDATE statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assignments {
    items: Vec<Assignment>,
}

impl Assignments {
    pub fn set(&mut self, column: impl Into<ColumnId>, value: impl Into<Expr>) {
        self.items.push(Assignment {
            column: column.into(),
            value: value.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Assignment> for Assignments {
    fn from_iter<T: IntoIterator<Item = Assignment>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
