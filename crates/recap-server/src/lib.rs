mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use recap_config::Config;
use recap_summarize::SummarizeState;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the provider client cannot be constructed
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let state = SummarizeState::from_config(&config.provider)?;
        Ok(Self::with_state(config, state))
    }

    /// Build the server around an already constructed relay state
    pub fn with_state(config: &Config, state: SummarizeState) -> Self {
        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.merge(recap_summarize::summarize_router(state));

        // Apply middleware layers (innermost first)
        app = app.layer(TraceLayer::new_for_http());

        if config.server.cors.enabled {
            app = app.layer(cors::cors_layer(&config.server.cors));
        }

        Self {
            router: app,
            listen_address: config.server.listen_address(),
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered, then drains
    /// in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bind {}: {e}", self.listen_address))?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
