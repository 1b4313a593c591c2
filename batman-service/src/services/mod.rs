pub mod database;
pub mod memory;
pub mod metrics;
pub mod seed;

pub use database::{Database, DocumentStore, MongoStore, SeedOutcome};
pub use memory::InMemoryStore;
pub use metrics::{get_metrics, init_metrics};
