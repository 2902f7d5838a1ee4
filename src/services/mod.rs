pub mod browse;
pub mod catalog;
pub mod query;

pub use catalog::Catalog;
pub use query::query;
