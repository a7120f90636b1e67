//! Mock AI providers for testing and local development.
//!
//! Used when Gemini is disabled via configuration. Tests can script
//! replies and inspect the prompts each provider received.

use super::{ImageAttachment, ProviderError, TextProvider, VisionProvider};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Canned diagnosis returned by the mock text provider when no reply
/// has been scripted.
const DEFAULT_TEXT_REPLY: &str = r#"{
  "conditions": [
    {"name": "Malaria", "prob": 40, "severity": "high", "urgency": "see doctor immediately", "reason": "Fever and chills in an endemic region", "doctor": "general practitioner"},
    {"name": "Typhoid fever", "prob": 25, "severity": "high", "urgency": "see doctor immediately", "reason": "Prolonged fever with abdominal discomfort", "doctor": "general practitioner"},
    {"name": "Influenza", "prob": 15, "severity": "moderate", "urgency": "monitor 2-3 days", "reason": "Fever with body aches and fatigue", "doctor": "general practitioner"},
    {"name": "Common cold", "prob": 12, "severity": "low", "urgency": "monitor 2-3 days", "reason": "Mild upper respiratory symptoms", "doctor": "general practitioner"},
    {"name": "Gastroenteritis", "prob": 8, "severity": "low", "urgency": "monitor 2-3 days", "reason": "Possible foodborne cause", "doctor": "gastroenterologist"}
  ]
}"#;

/// Canned finding returned by the mock vision provider when no reply
/// has been scripted.
const DEFAULT_VISION_REPLY: &str = "Issue is: localized skin rash with mild swelling";

/// Mock text provider with scriptable replies.
pub struct MockTextProvider {
    enabled: bool,
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<(String, String)>>,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply to return from the next `generate` call.
    pub fn push_reply(&self, reply: Result<String, ProviderError>) {
        self.replies
            .lock()
            .expect("Mock replies mutex poisoned")
            .push_back(reply);
    }

    /// Prompts received so far, as (system_instructions, prompt) pairs.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .expect("Mock requests mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        system_instructions: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .map_err(|e| ProviderError::ApiError(format!("Mock requests mutex poisoned: {}", e)))?
            .push((system_instructions.to_string(), prompt.to_string()));

        let scripted = self
            .replies
            .lock()
            .map_err(|e| ProviderError::ApiError(format!("Mock replies mutex poisoned: {}", e)))?
            .pop_front();

        match scripted {
            Some(reply) => reply,
            None => Ok(DEFAULT_TEXT_REPLY.to_string()),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider disabled".to_string(),
            ))
        }
    }
}

/// Mock vision provider with scriptable replies.
pub struct MockVisionProvider {
    enabled: bool,
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<(String, String)>>,
}

impl MockVisionProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply to return from the next `describe` call.
    pub fn push_reply(&self, reply: Result<String, ProviderError>) {
        self.replies
            .lock()
            .expect("Mock replies mutex poisoned")
            .push_back(reply);
    }

    /// Requests received so far, as (instruction, mime_type) pairs.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .expect("Mock requests mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl VisionProvider for MockVisionProvider {
    async fn describe(
        &self,
        instruction: &str,
        image: &ImageAttachment,
    ) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .map_err(|e| ProviderError::ApiError(format!("Mock requests mutex poisoned: {}", e)))?
            .push((instruction.to_string(), image.mime_type.clone()));

        let scripted = self
            .replies
            .lock()
            .map_err(|e| ProviderError::ApiError(format!("Mock replies mutex poisoned: {}", e)))?
            .pop_front();

        match scripted {
            Some(reply) => reply,
            None => Ok(DEFAULT_VISION_REPLY.to_string()),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock vision provider disabled".to_string(),
            ))
        }
    }
}
