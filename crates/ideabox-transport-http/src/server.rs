//! HTTP server that binds the axum Router to a TCP socket.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use ideabox_registry::IdeaRepository;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the idea API.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `repo` — shared idea store
    /// * `addr` — socket address to listen on
    pub fn new(repo: Arc<dyn IdeaRepository>, addr: SocketAddr) -> Self {
        Self {
            addr,
            state: AppState { repo },
        }
    }

    /// The address the server will bind to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Starts the server and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), HttpTransportError> {
        let listener =
            TcpListener::bind(self.addr)
                .await
                .map_err(|e| HttpTransportError::Bind {
                    addr: self.addr.to_string(),
                    source: e,
                })?;

        tracing::info!(addr = %self.addr, "ideabox HTTP server ready");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| HttpTransportError::Serve(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideabox_store_sqlite::SqliteIdeaRepository;

    fn make_repo() -> Arc<dyn IdeaRepository> {
        Arc::new(SqliteIdeaRepository::open_in_memory().expect("in-memory db"))
    }

    #[test]
    fn new_keeps_address() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 5000));
        let server = HttpServer::new(make_repo(), addr);
        assert_eq!(server.addr().port(), 5000);
        assert!(server.addr().ip().is_loopback());
    }

    #[tokio::test]
    async fn bind_conflict_reports_address() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = taken.local_addr().expect("addr");
        let err = HttpServer::new(make_repo(), addr).run().await.unwrap_err();
        assert!(matches!(err, HttpTransportError::Bind { .. }));
        assert!(err.to_string().contains(&addr.to_string()));
    }
}
