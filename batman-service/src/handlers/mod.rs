pub mod batmobiles;
pub mod gadgets;
pub mod health;

pub use batmobiles::{create_batmobile, list_batmobiles, seed_batmobiles};
pub use gadgets::{create_gadget, list_gadgets, seed_gadgets};
pub use health::{
    database_status, health_check, hello, metrics_endpoint, readiness_check, root,
};
