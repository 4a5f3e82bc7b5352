//! Test doubles and fixtures shared by unit tests across modules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::llm_client::{Completion, LlmError, LlmProvider, Usage};
use crate::models::audience::NewAudience;

/// What the stub provider answers with.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Empty,
    ApiError(u16),
}

/// Deterministic `LlmProvider` that records every call.
pub struct StubProvider {
    reply: Mutex<StubReply>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    systems: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(vec![]),
            systems: Mutex::new(vec![]),
        }
    }

    pub fn set_reply(&self, reply: StubReply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn systems(&self) -> Vec<String> {
        self.systems.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    async fn complete(&self, prompt: &str, system: &str) -> Result<Completion, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.systems.lock().unwrap().push(system.to_string());

        let usage = Some(Usage {
            prompt_tokens: 150,
            completion_tokens: 90,
            total_tokens: 240,
        });

        match self.reply.lock().unwrap().clone() {
            StubReply::Text(text) => Ok(Completion {
                text: Some(text),
                usage,
            }),
            StubReply::Empty => Ok(Completion { text: None, usage }),
            StubReply::ApiError(status) => Err(LlmError::Api {
                status,
                message: "stubbed provider failure".to_string(),
            }),
        }
    }
}

/// A well-formed model reply.
pub fn concept_json() -> String {
    json!({
        "title": "Level Up Your Everyday Tech",
        "description": "A campaign for young urban professionals who want smarter gadgets.",
        "value_proposition": "Premium tech that fits a mid-range budget.",
        "key_messages": [
            "Smart tech, smart price",
            "Built for life on the move",
            "Upgrade without the overspend"
        ],
        "channels": ["Instagram", "YouTube", "Tech podcasts"],
        "tone": "Energetic and knowledgeable",
        "call_to_action": "Explore the collection today"
    })
    .to_string()
}

/// The "Tech Millennials" audience used across workflow scenarios.
pub fn tech_millennials() -> NewAudience {
    NewAudience {
        name: "Tech Millennials".to_string(),
        age_range: "25-34".to_string(),
        location: "Urban US".to_string(),
        income: "$50k-$75k".to_string(),
        interests: vec!["Technology".to_string()],
        pain_points: String::new(),
        goals: String::new(),
    }
}
