//! HTTP API module: the plain-text endpoints and their route table.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
