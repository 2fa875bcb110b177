//! Web layer - HTTP surface
//!
//! Contains the route table, multipart handlers, error mapping,
//! and server lifecycle.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export commonly used types
pub use error::ApiError;
pub use routes::router;
pub use server::serve;
pub use state::{AppState, PlanUseCase};
