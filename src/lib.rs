pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod page;
pub mod schema;
pub mod server;

// Convenient re-exports for tests and external callers
pub use client::HealthClient;
pub use config::Config;
pub use error::{Result, ServiceError};
pub use schema::{create_schema, AppSchema, QueryRoot};
