//! API layer - HTTP endpoints and middleware

pub mod fallback;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

pub use router::{build_cors_layer, create_router};
pub use state::AppState;
