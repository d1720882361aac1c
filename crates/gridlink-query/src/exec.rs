mod query;
pub use query::QueryExecution;

mod update;
pub use update::UpdateExecution;
