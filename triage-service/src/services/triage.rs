//! Diagnosis orchestration.
//!
//! Combines image findings, prompt assembly, and the text model into
//! one flow. Model failures surface as an error result payload rather
//! than an HTTP failure so clients always receive a diagnosis body.

use crate::models::{DiagnosisCondition, DiagnosisResult, Gender, PatientProfile, SymptomReport};
use crate::services::images::IssueExtractor;
use crate::services::prompt;
use crate::services::providers::{strip_code_fences, ProviderError, TextProvider, VisionProvider};
use serde::Deserialize;
use std::sync::Arc;

/// Runs the end-to-end diagnosis flow.
pub struct TriageService {
    text: Arc<dyn TextProvider>,
    images: IssueExtractor,
}

impl TriageService {
    pub fn new(text: Arc<dyn TextProvider>, vision: Arc<dyn VisionProvider>) -> Self {
        Self {
            text,
            images: IssueExtractor::new(vision),
        }
    }

    /// Produce a diagnosis for the given patient and symptoms.
    ///
    /// Image findings are appended to the symptom list in input order
    /// before the prompt is built. Empty findings are skipped.
    pub async fn diagnose(
        &self,
        profile: PatientProfile,
        mut report: SymptomReport,
        image_paths: Vec<String>,
    ) -> DiagnosisResult {
        let gender = Gender::normalize(&profile.gender);

        for path in &image_paths {
            let finding = self.images.extract(path).await;
            if !finding.is_empty() {
                report.symptoms.push(finding);
            }
        }

        let parts = prompt::build(&profile, gender, &report);

        tracing::info!(
            patient = %profile.name,
            symptom_count = report.symptoms.len(),
            image_count = image_paths.len(),
            "Running diagnosis"
        );

        let raw = match self
            .text
            .generate(&parts.system_instructions, &parts.task)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(error = %e, "Diagnosis generation failed");
                return DiagnosisResult::Error {
                    message: format!("AI generation error: {}", e),
                    raw_output: String::new(),
                };
            }
        };

        parse_reply(&raw)
    }

    /// Readiness of the backing text model.
    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.text.health_check().await
    }
}

#[derive(Debug, Deserialize)]
struct DiagnosisReply {
    #[serde(default)]
    conditions: Vec<DiagnosisCondition>,
}

/// Parse the model's reply into a diagnosis result.
///
/// Keeps the raw reply in the error payload so callers can inspect
/// what the model actually returned.
fn parse_reply(raw: &str) -> DiagnosisResult {
    let raw = raw.trim();
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<DiagnosisReply>(cleaned) {
        Ok(reply) => DiagnosisResult::Success {
            conditions: reply.conditions,
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse diagnosis reply");
            DiagnosisResult::Error {
                message: format!("AI generation error: {}", e),
                raw_output: raw.to_string(),
            }
        }
    }
}
