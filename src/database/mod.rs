pub mod error;
pub mod manager;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod resource;

pub use error::RepositoryError;
pub use manager::{DatabaseError, DatabaseManager};
pub use repository::{Repository, ResourceStore, Store};
pub use resource::{ConstraintPolicy, Resource, SqlValue};
