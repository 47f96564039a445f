//! Development backend serving the activities API and the built client.

mod activity_repository;
mod error;
mod memory_storage;
mod route;
mod seed;
mod telemetry;

pub use activity_repository::ActivityRepository;
pub use error::SignupError;
pub use memory_storage::MemoryStorage;
pub use route::{create_activities_route, create_app, EmailQuery};
pub use seed::default_catalog;
pub use telemetry::init_tracing;
