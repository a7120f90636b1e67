mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use triage_service::services::providers::mock::{MockTextProvider, MockVisionProvider};
use triage_service::services::providers::ProviderError;

fn symptom_payload() -> Value {
    json!({
        "name": "Ada",
        "age": 34,
        "gender": "female",
        "preferred_language": "English",
        "symptoms": ["fever", "chills"],
        "taking_pills": "no",
        "duration": "3 days",
        "pain_rating": 7,
        "known_conditions": "asthma"
    })
}

fn write_test_png() -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 80, 80]));
    img.save(file.path()).expect("Failed to write test image");
    file
}

// =============================================================================
// Diagnosis Flow
// =============================================================================

#[tokio::test]
async fn diagnosis_returns_conditions_from_the_model() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&symptom_payload())
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");

    let conditions = body["conditions"].as_array().expect("conditions missing");
    assert_eq!(conditions.len(), 5);
    assert_eq!(conditions[0]["name"], "Malaria");
    assert_eq!(conditions[0]["urgency"], "see doctor immediately");
}

#[tokio::test]
async fn diagnosis_applies_defaults_for_missing_fields() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let requests = app.text.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .0
        .contains("- Name: Anonymous, Age: 30, Gender: Other"));
    assert!(requests[0].0.contains("Respond in English."));
    assert!(requests[0].0.contains("Pain rating: 5/10"));
}

#[tokio::test]
async fn diagnosis_rejects_out_of_range_pain_rating() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let mut payload = symptom_payload();
    payload["pain_rating"] = json!(11);

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Validation error");
}

#[tokio::test]
async fn diagnosis_accepts_boolean_taking_pills() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let mut payload = symptom_payload();
    payload["taking_pills"] = json!(true);

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let requests = app.text.requests();
    assert!(requests[0].0.contains("Taking pills: yes"));
}

// =============================================================================
// Model Reply Handling
// =============================================================================

#[tokio::test]
async fn diagnosis_accepts_fenced_model_reply() {
    let text = Arc::new(MockTextProvider::new(true));
    text.push_reply(Ok("```json\n{\"conditions\": [{\"name\": \"Flu\", \"prob\": 100, \"severity\": \"low\", \"urgency\": \"monitor 2-3 days\", \"reason\": \"seasonal\", \"doctor\": \"general practitioner\"}]}\n```".to_string()));

    let app = TestApp::spawn_with_providers(text, Arc::new(MockVisionProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&symptom_payload())
        .send()
        .await
        .expect("Failed to execute request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert_eq!(body["conditions"][0]["name"], "Flu");
}

#[tokio::test]
async fn diagnosis_preserves_raw_output_when_model_returns_prose() {
    let text = Arc::new(MockTextProvider::new(true));
    text.push_reply(Ok("I am sorry, I cannot help with that.".to_string()));

    let app = TestApp::spawn_with_providers(text, Arc::new(MockVisionProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&symptom_payload())
        .send()
        .await
        .expect("Failed to execute request");

    // Model failures are reported in the body, not as HTTP errors
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("AI generation error:"));
    assert_eq!(body["raw_output"], "I am sorry, I cannot help with that.");
}

#[tokio::test]
async fn diagnosis_reports_provider_failure() {
    let text = Arc::new(MockTextProvider::new(true));
    text.push_reply(Err(ProviderError::ApiError("boom".to_string())));

    let app = TestApp::spawn_with_providers(text, Arc::new(MockVisionProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&symptom_payload())
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "AI generation error: API error: boom");
    assert_eq!(body["raw_output"], "");
}

// =============================================================================
// Image Findings
// =============================================================================

#[tokio::test]
async fn diagnosis_appends_image_findings_in_input_order() {
    let first = write_test_png();
    let second = write_test_png();

    let vision = Arc::new(MockVisionProvider::new(true));
    vision.push_reply(Ok("Issue is: burn on forearm".to_string()));
    vision.push_reply(Ok("Issue is: swollen ankle".to_string()));

    let app =
        TestApp::spawn_with_providers(Arc::new(MockTextProvider::new(true)), vision.clone()).await;
    let client = Client::new();

    let mut payload = symptom_payload();
    payload["images"] = json!([
        first.path().to_str().unwrap(),
        "/nonexistent/photo.png",
        second.path().to_str().unwrap(),
    ]);

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(vision.requests().len(), 2);

    let requests = app.text.requests();
    let task = &requests[0].1;

    let burn = task.find("Issue is: burn on forearm").expect("first finding missing");
    let unreadable = task
        .find("Could not load image /nonexistent/photo.png")
        .expect("placeholder missing");
    let ankle = task.find("Issue is: swollen ankle").expect("second finding missing");

    assert!(burn < unreadable);
    assert!(unreadable < ankle);
}

#[tokio::test]
async fn diagnosis_with_unreadable_image_still_succeeds() {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(b"not an image").expect("Failed to write");

    let app = TestApp::spawn().await;
    let client = Client::new();

    let mut payload = symptom_payload();
    payload["images"] = json!([file.path().to_str().unwrap()]);

    let response = client
        .post(&format!("{}/api/diagnosis", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");

    let requests = app.text.requests();
    assert!(requests[0].1.contains("Could not load image"));
}
