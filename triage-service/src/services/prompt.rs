//! Prompt assembly for the diagnosis flow.
//!
//! Pure string building so the exact wording sent to the model can be
//! unit tested without a provider.

use crate::models::{Gender, PatientProfile, SymptomReport};
use serde_json::json;

/// The two halves of a diagnosis request to the text model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParts {
    pub system_instructions: String,
    pub task: String,
}

/// Build the system instructions and task prompt for one diagnosis.
///
/// `report.symptoms` is expected to already carry any image findings
/// appended by the caller.
pub fn build(profile: &PatientProfile, gender: Gender, report: &SymptomReport) -> PromptParts {
    let system_instructions = format!(
        r#"You are a professional medical triage assistant.
Respond in {language}.
Patient info:
- Name: {name}, Age: {age}, Gender: {gender}
Symptoms: {symptoms}
Pain rating: {pain_rating}/10
Taking pills: {taking_pills}
Duration: {duration}
Known conditions: {known_conditions}

CRITICAL:
For each of the top five possible conditions, provide:
1. Name
2. Probability (0-100 integer, sum=100)
3. Severity: low, moderate, high
4. Urgency: see doctor immediately or monitor 2-3 days
5. Reason: why this condition is suspected
6. Recommended doctor type (e.g., dermatologist, cardiologist)

Output STRICT JSON ONLY like:
{{
  "conditions":[
    {{"name":"...","prob":0-100,"severity":"low|moderate|high","urgency":"see doctor immediately|monitor 2-3 days","reason":"...","doctor":"..."}},
    ...
  ]
}}"#,
        language = profile.preferred_language,
        name = profile.name,
        age = profile.age,
        gender = gender,
        symptoms = report.symptoms.join(", "),
        pain_rating = report.pain_rating,
        taking_pills = report.taking_pills,
        duration = report.duration,
        known_conditions = profile.known_conditions,
    );

    let payload = json!({
        "symptoms": report.symptoms,
        "mandatory": {
            "taking_pills": report.taking_pills,
            "duration": report.duration,
            "known_conditions": profile.known_conditions,
            "pain_rating": report.pain_rating,
        }
    });

    let task = format!(
        r#"TASK:
Return the top five differential diagnoses with all required fields (name, prob, severity, urgency, reason, doctor).
Strict JSON output only. Input data:
{payload}"#,
        payload = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string()),
    );

    PromptParts {
        system_instructions,
        task,
    }
}
