//! Command-line hospital lookup.
//!
//! Prints a JSON envelope on stdout so the output can be piped into
//! other tools. Tracing stays off to keep stdout clean.

use serde_json::json;
use std::process::ExitCode;
use std::time::Duration;
use triage_service::config::TriageConfig;
use triage_service::services::lookup;
use triage_service::services::providers::gemini::{GeminiConfig, GeminiProvider};

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (city, condition) = match (args.next(), args.next()) {
        (Some(city), Some(condition)) => (city, condition),
        _ => {
            eprintln!("Usage: hospital-lookup <city> <condition>");
            return ExitCode::from(2);
        }
    };

    let config = match TriageConfig::load() {
        Ok(config) => config,
        Err(e) => {
            println!(
                "{}",
                json!({"status": "error", "message": format!("Configuration error: {}", e)})
            );
            return ExitCode::FAILURE;
        }
    };

    let provider = GeminiProvider::new(GeminiConfig {
        api_key: config.gemini.api_key.clone(),
        text_model: config.gemini.text_model.clone(),
        vision_model: config.gemini.vision_model.clone(),
        request_timeout: Duration::from_secs(config.gemini.request_timeout_secs),
    });

    match lookup::top_hospitals(&provider, &city, &condition).await {
        Ok(hospitals) => {
            println!("{}", json!({"status": "success", "hospitals": hospitals}));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", json!({"status": "error", "message": e.to_string()}));
            ExitCode::FAILURE
        }
    }
}
