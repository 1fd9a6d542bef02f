// Domain layer modules
pub mod access_path;
pub mod catalog_error;
pub mod product;
pub mod product_query;
pub mod query_limit_config;

// Re-exports
pub use access_path::{AccessPath, ScanFilter, SecondaryIndex};
pub use catalog_error::CatalogError;
pub use product::{Product, ProductList, PRODUCT_ID_ATTRIBUTE};
pub use product_query::ProductQuery;
pub use query_limit_config::QueryLimitConfig;
