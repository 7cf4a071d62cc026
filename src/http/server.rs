//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the axum Router for the chosen variant
//! - Bind the router to an already-bound listener
//! - Stop when the `Shutdown` coordinator fires

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::http::router::{self, Variant};
use crate::lifecycle::shutdown;

/// HTTP server for one demo variant.
pub struct HttpServer {
    router: Router,
    variant: Variant,
}

impl HttpServer {
    pub fn new(variant: Variant) -> Self {
        Self {
            router: router::build(variant),
            variant,
        }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires and in-flight requests have completed.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            variant = %self.variant,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown::requested(&mut shutdown).await;
                tracing::info!("Shutdown requested");
            })
            .await?;

        tracing::info!(variant = %self.variant, "HTTP server stopped");
        Ok(())
    }
}
