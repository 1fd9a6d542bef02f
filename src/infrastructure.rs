// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod product_repository;
pub mod shared_repository;

// Re-exports
pub use config::{DynamoDbConfig, DynamoDbConfigError};
pub use logging::init_logging;
pub use product_repository::{DynamoProductRepository, ProductRepository, ProductRepositoryError};
pub use shared_repository::shared_product_repository;
