use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use triage_service::config::{DatabaseSettings, GeminiSettings, TriageConfig};
use triage_service::services::providers::mock::{MockTextProvider, MockVisionProvider};
use triage_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub text: Arc<MockTextProvider>,
    pub vision: Arc<MockVisionProvider>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_providers(
            Arc::new(MockTextProvider::new(true)),
            Arc::new(MockVisionProvider::new(true)),
        )
        .await
    }

    pub async fn spawn_with_providers(
        text: Arc<MockTextProvider>,
        vision: Arc<MockVisionProvider>,
    ) -> Self {
        let config = TriageConfig {
            common: CoreConfig { port: 0 }, // Random port for testing
            gemini: GeminiSettings {
                api_key: "test-key".to_string(),
                text_model: "gemini-2.0-flash".to_string(),
                vision_model: "gemini-2.0-flash".to_string(),
                request_timeout_secs: 5,
                enabled: false, // Use mock
            },
            database: DatabaseSettings {
                url: "mysql://localhost:3306".to_string(),
                database: "medassist_test".to_string(),
            },
        };

        let app = Application::build_with_providers(config, text.clone(), vision.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            text,
            vision,
        }
    }
}
