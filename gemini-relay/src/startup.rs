//! Application startup and lifecycle management.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use service_core::error::AppError;
use tokio::net::TcpListener;

use crate::build_router;
use crate::config::RelayConfig;
use crate::services::providers::gemini::{GeminiConfig, GeminiProvider};
use crate::services::providers::TextProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TextProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the real Gemini provider.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn TextProvider> = Arc::new(GeminiProvider::new(GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
        }));

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini text provider"
        );

        Self::build_with_provider(config, provider).await
    }

    /// Build with an injected provider (used by tests).
    pub async fn build_with_provider(
        config: RelayConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState { provider };
        let router = build_router(state, config.cors_policy);

        // Port 0 binds a random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Relay service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}
