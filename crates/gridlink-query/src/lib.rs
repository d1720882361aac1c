mod exec;
pub use exec::{QueryExecution, UpdateExecution};

mod mutation;

mod pager;
pub use pager::Pager;

mod scope;
use scope::Scope;

mod serializer;

mod translate;
pub use translate::{TranslatedQuery, Translator};
