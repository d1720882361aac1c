/// The runtime type of a column or expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Bool,
    I32,
    I64,
    F32,
    F64,
    String,
    Bytes,
    Timestamp,
    Decimal,
    List(Box<Type>),
}

impl Type {
    pub fn list(item: Type) -> Self {
        Self::List(Box::new(item))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The element type of a list, or the type itself for scalars.
    pub fn item_ty(&self) -> &Type {
        match self {
            Self::List(item) => item,
            other => other,
        }
    }
}
