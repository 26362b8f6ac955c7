//! Gateway API
//!
//! Axum router, request handlers, and shared application state.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
