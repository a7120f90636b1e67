//! Hospital recommendation lookup via the text model.

use crate::services::providers::{strip_code_fences, ProviderError, TextProvider};
use thiserror::Error;

/// Maximum hospital names returned per lookup.
pub const MAX_HOSPITALS: usize = 5;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0}")]
    Provider(#[from] ProviderError),
    #[error("Expected a JSON array of hospital names, got: {0}")]
    UnexpectedShape(String),
}

/// Ask the model for up to five reputable hospitals in `city` known
/// for treating `condition`.
///
/// Longer replies are truncated to [`MAX_HOSPITALS`]; replies that are
/// not a JSON string array are rejected with a preview of what came
/// back.
pub async fn top_hospitals(
    provider: &dyn TextProvider,
    city: &str,
    condition: &str,
) -> Result<Vec<String>, LookupError> {
    let prompt = format!(
        r#"Patient's city: {city}
Condition: {condition}

Task: Without searching the web, provide 5 reputable hospitals in {city} that are well-known for treating {condition}.
Output as a JSON array only: ["Hospital 1", "Hospital 2", "Hospital 3", "Hospital 4", "Hospital 5"]"#,
        city = city,
        condition = condition,
    );

    let raw = provider.generate("", &prompt).await?;
    let cleaned = strip_code_fences(&raw);

    let mut hospitals: Vec<String> = serde_json::from_str(cleaned)
        .map_err(|_| LookupError::UnexpectedShape(preview(cleaned)))?;
    hospitals.truncate(MAX_HOSPITALS);

    Ok(hospitals)
}

fn preview(content: &str) -> String {
    const MAX_CHARS: usize = 200;

    if content.chars().count() > MAX_CHARS {
        let truncated: String = content.chars().take(MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        content.to_string()
    }
}
