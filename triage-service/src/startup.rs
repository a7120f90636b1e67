use crate::config::TriageConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiProvider};
use crate::services::providers::mock::{MockTextProvider, MockVisionProvider};
use crate::services::providers::{TextProvider, VisionProvider};
use crate::services::{HospitalDirectory, StaticDirectory, TriageService};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub triage: Arc<TriageService>,
    pub directory: Arc<dyn HospitalDirectory>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with providers selected from configuration.
    pub async fn build(config: TriageConfig) -> Result<Self, AppError> {
        let (text, vision) = select_providers(&config);
        Self::build_with_providers(config, text, vision).await
    }

    /// Build the application with explicit providers. Tests use this to
    /// inject scriptable mocks.
    pub async fn build_with_providers(
        config: TriageConfig,
        text: Arc<dyn TextProvider>,
        vision: Arc<dyn VisionProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            triage: Arc::new(TriageService::new(text, vision)),
            directory: Arc::new(StaticDirectory::seeded()),
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/api/hospitals", get(handlers::list_hospitals))
            .route("/api/book", post(handlers::book_session))
            .route("/api/sessions", get(handlers::list_sessions))
            .route("/api/diagnosis", post(handlers::run_diagnosis))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Choose real or mock providers based on the Gemini `enabled` flag.
fn select_providers(config: &TriageConfig) -> (Arc<dyn TextProvider>, Arc<dyn VisionProvider>) {
    if config.gemini.enabled {
        tracing::info!(
            text_model = %config.gemini.text_model,
            vision_model = %config.gemini.vision_model,
            "Gemini provider initialized"
        );
        let provider = Arc::new(GeminiProvider::new(GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            text_model: config.gemini.text_model.clone(),
            vision_model: config.gemini.vision_model.clone(),
            request_timeout: Duration::from_secs(config.gemini.request_timeout_secs),
        }));
        let text: Arc<dyn TextProvider> = provider.clone();
        let vision: Arc<dyn VisionProvider> = provider;
        (text, vision)
    } else {
        tracing::info!("Gemini provider disabled, using mock providers");
        (
            Arc::new(MockTextProvider::new(true)),
            Arc::new(MockVisionProvider::new(true)),
        )
    }
}
