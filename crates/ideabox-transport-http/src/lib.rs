//! JSON/HTTP transport for the idea store.
//! Exposes CRUD under `/api/ideas`, aggregates under `/api/stats`,
//! and a `/health` liveness probe.

mod error;
mod payload;
pub mod router;
pub mod server;

pub use error::{ApiError, HttpTransportError};
pub use router::{build_router, AppState};
pub use server::HttpServer;
