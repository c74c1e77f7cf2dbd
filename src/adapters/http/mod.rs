//! HTTP adapters - REST API implementations.

mod app;
pub mod health;
pub mod naming;

pub use app::{build_router, cors_layer};
pub use naming::{naming_routes, NamingAppState};
