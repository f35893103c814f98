//! Aerofast API crate - axum HTTP server, route handlers, SSE streaming.
//!
//! Serves the catalog, the concierge, the contact desk and the static site
//! content. Interactive state (conversation, contact form, catalog
//! filters) lives in a *visit*, one per mounted page.

pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod visits;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
pub use visits::{Visit, VisitRegistry};
