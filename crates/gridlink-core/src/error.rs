use std::sync::Arc;

/// Create an error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// Return early with an error created from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// An error that can occur in gridlink.
///
/// Errors are grouped by where in the execution pipeline they are raised:
/// schema-definition errors surface before any store I/O, translation errors
/// are collected over a whole visitor pass and reported together, decode and
/// mutation errors abort the current batch or statement, and store errors are
/// passed through from the client untouched.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    /// Bad or missing wire metadata on a table or column.
    Schema(String),

    /// One or more problems found while translating a statement. All
    /// problems from a single pass are carried together.
    Translation(Vec<String>),

    /// Malformed wire bytes: unexpected tag, bad framing, or a value that
    /// cannot be coerced to the declared runtime type.
    Decode(String),

    /// A mutation that cannot be applied consistently: duplicate or missing
    /// identity, or a missing parent for a nested insert.
    Mutation(String),

    /// The statement is valid but the target store cannot execute it.
    Unsupported(String),

    /// Failure reported by the remote store client.
    Store(Arc<anyhow::Error>),

    /// Ad-hoc error created via `err!` / `bail!`.
    Adhoc(String),
}

impl Error {
    pub fn schema(msg: impl Into<String>) -> Self {
        ErrorKind::Schema(msg.into()).into()
    }

    pub fn translation(problems: Vec<String>) -> Self {
        debug_assert!(!problems.is_empty());
        ErrorKind::Translation(problems).into()
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        ErrorKind::Decode(msg.into()).into()
    }

    pub fn mutation(msg: impl Into<String>) -> Self {
        ErrorKind::Mutation(msg.into()).into()
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        ErrorKind::Unsupported(msg.into()).into()
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Self {
        ErrorKind::Adhoc(args.to_string()).into()
    }

    pub fn is_schema(&self) -> bool {
        matches!(*self.inner, ErrorKind::Schema(_))
    }

    pub fn is_translation(&self) -> bool {
        matches!(*self.inner, ErrorKind::Translation(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(*self.inner, ErrorKind::Decode(_))
    }

    pub fn is_mutation(&self) -> bool {
        matches!(*self.inner, ErrorKind::Mutation(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(*self.inner, ErrorKind::Unsupported(_))
    }

    /// The individual problems of a translation error, if this is one.
    pub fn translation_problems(&self) -> Option<&[String]> {
        match &*self.inner {
            ErrorKind::Translation(problems) => Some(problems),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.inner {
            ErrorKind::Store(err) => Some(err.as_ref().as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &*self.inner {
            ErrorKind::Schema(msg) => write!(f, "schema definition error: {msg}"),
            ErrorKind::Translation(problems) => {
                f.write_str("translation failed")?;
                for problem in problems {
                    write!(f, "; {problem}")?;
                }
                Ok(())
            }
            ErrorKind::Decode(msg) => write!(f, "decode error: {msg}"),
            ErrorKind::Mutation(msg) => write!(f, "mutation error: {msg}"),
            ErrorKind::Unsupported(msg) => write!(f, "unsupported operation: {msg}"),
            ErrorKind::Store(err) => write!(f, "store error: {err}"),
            ErrorKind::Adhoc(msg) => f.write_str(msg),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.inner).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            inner: Arc::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        ErrorKind::Store(Arc::new(err)).into()
    }
}
