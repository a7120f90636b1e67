use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::patient::{PatientProfile, SymptomReport};

/// Request body for `POST /api/diagnosis`.
///
/// Every field is optional on the wire; absent fields fall back to the
/// defaults below so partial clients still produce a usable prompt.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DiagnosisRequest {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "default_language")]
    pub preferred_language: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default = "default_taking_pills", deserialize_with = "string_or_bool")]
    pub taking_pills: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub known_conditions: String,
    #[serde(default = "default_pain_rating")]
    #[validate(range(max = 10))]
    pub pain_rating: u8,
    /// Filesystem paths of images to analyze alongside the symptoms.
    #[serde(default)]
    pub images: Vec<String>,
}

impl DiagnosisRequest {
    /// Split the request into the pipeline's inputs.
    pub fn into_parts(self) -> (PatientProfile, SymptomReport, Vec<String>) {
        let profile = PatientProfile {
            name: self.name,
            age: self.age,
            gender: self.gender,
            preferred_language: self.preferred_language,
            known_conditions: self.known_conditions,
        };
        let report = SymptomReport {
            symptoms: self.symptoms,
            taking_pills: self.taking_pills,
            duration: self.duration,
            pain_rating: self.pain_rating,
        };
        (profile, report, self.images)
    }
}

fn default_name() -> String {
    "Anonymous".to_string()
}

fn default_age() -> u32 {
    30
}

fn default_gender() -> String {
    "Other".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

fn default_taking_pills() -> String {
    "no".to_string()
}

fn default_pain_rating() -> u8 {
    5
}

/// Accept `taking_pills` as either a string or a bare boolean.
fn string_or_bool<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrBool {
        Str(String),
        Bool(bool),
    }

    Ok(match StringOrBool::deserialize(deserializer)? {
        StringOrBool::Str(s) => s,
        StringOrBool::Bool(true) => "yes".to_string(),
        StringOrBool::Bool(false) => "no".to_string(),
    })
}

/// One differential-diagnosis entry in the model's strict-JSON reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCondition {
    pub name: String,
    pub prob: u8,
    pub severity: Severity,
    pub urgency: Urgency,
    pub reason: String,
    pub doctor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "see doctor immediately")]
    SeeDoctorImmediately,
    #[serde(rename = "monitor 2-3 days")]
    Monitor2To3Days,
}

/// Terminal outcome of the diagnosis pipeline, serialized as the response
/// body.
///
/// Model and parse failures are reported here rather than through the HTTP
/// status; `raw_output` carries the unparsed reply when one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DiagnosisResult {
    Success { conditions: Vec<DiagnosisCondition> },
    Error { message: String, raw_output: String },
}
