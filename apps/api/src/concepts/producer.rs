//! Generative Concept Producer: audience description in, structured concept out.
//!
//! One provider call per invocation. The reply is parsed strictly as JSON and
//! checked against the concept schema before it is deserialized, so a reply with
//! the wrong shape is reported as `MalformedResponse` rather than a serde error.
//! Nothing is persisted here; the workflows own persistence.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::concepts::prompts::{
    ADDITIONAL_CONTEXT_SECTION, CONCEPT_PROMPT_TEMPLATE, CONCEPT_SYSTEM_PERSONA, NOT_SPECIFIED,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, LlmError, LlmProvider, MODEL};
use crate::models::audience::NewAudience;
use crate::models::concept::GeneratedConcept;

#[derive(Debug, Error)]
pub enum ProducerError {
    #[error("the model returned an empty response")]
    EmptyResponse,

    #[error("the model returned a malformed response: {0}")]
    MalformedResponse(String),

    #[error("the model provider failed: {0}")]
    Provider(#[from] LlmError),
}

const STRING_KEYS: [&str; 3] = ["value_proposition", "tone", "call_to_action"];
const LIST_KEYS: [&str; 2] = ["key_messages", "channels"];

#[derive(Clone)]
pub struct ConceptProducer {
    provider: Arc<dyn LlmProvider>,
}

impl ConceptProducer {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Generates a concept for `audience`, optionally steered by free-text context.
    pub async fn generate_concept(
        &self,
        audience: &NewAudience,
        additional_context: Option<&str>,
    ) -> Result<GeneratedConcept, ProducerError> {
        let prompt = build_concept_prompt(audience, additional_context);
        let system = format!("{CONCEPT_SYSTEM_PERSONA} {JSON_ONLY_SYSTEM}");

        debug!("Requesting concept for audience '{}'", audience.name);
        let completion = self.provider.complete(&prompt, &system).await?;

        if let Some(usage) = &completion.usage {
            info!(
                model = MODEL,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Concept generation token usage"
            );
        }

        let text = completion
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProducerError::EmptyResponse)?;

        parse_concept(&text)
    }
}

/// Fills the concept template with every audience field.
pub fn build_concept_prompt(audience: &NewAudience, additional_context: Option<&str>) -> String {
    let or_unspecified = |s: &str| {
        if s.trim().is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            s.trim().to_string()
        }
    };

    let context_section = match additional_context.map(str::trim) {
        Some(ctx) if !ctx.is_empty() => ADDITIONAL_CONTEXT_SECTION.replace("{context}", ctx),
        _ => String::new(),
    };

    CONCEPT_PROMPT_TEMPLATE
        .replace("{name}", &audience.name)
        .replace("{age_range}", &audience.age_range)
        .replace("{location}", &audience.location)
        .replace("{income}", &audience.income)
        .replace("{interests}", &audience.interests.join(", "))
        .replace("{pain_points}", &or_unspecified(&audience.pain_points))
        .replace("{goals}", &or_unspecified(&audience.goals))
        .replace("{additional_context}", &context_section)
}

/// Parses a model reply into a concept, enforcing the schema.
pub fn parse_concept(text: &str) -> Result<GeneratedConcept, ProducerError> {
    let mut value: Value = serde_json::from_str(strip_json_fences(text)).map_err(|e| {
        ProducerError::MalformedResponse(format!("response is not valid JSON: {e}"))
    })?;

    check_schema(&value).map_err(ProducerError::MalformedResponse)?;

    // `title` wins over the legacy `headline` when a reply carries both.
    if let Some(obj) = value.as_object_mut() {
        if obj.contains_key("title") {
            obj.remove("headline");
        }
    }

    let concept: GeneratedConcept = serde_json::from_value(value)
        .map_err(|e| ProducerError::MalformedResponse(e.to_string()))?;

    if concept.title.trim().is_empty() {
        return Err(ProducerError::MalformedResponse(
            "`title` is empty".to_string(),
        ));
    }
    if concept.key_messages.iter().all(|m| m.trim().is_empty()) {
        return Err(ProducerError::MalformedResponse(
            "`key_messages` must contain at least one message".to_string(),
        ));
    }

    Ok(concept)
}

fn check_schema(value: &Value) -> Result<(), String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "expected a JSON object".to_string())?;

    let title_key = if obj.contains_key("title") {
        "title"
    } else {
        "headline"
    };

    for key in std::iter::once(title_key).chain(STRING_KEYS) {
        match obj.get(key) {
            Some(Value::String(_)) => {}
            Some(_) => return Err(format!("`{key}` must be a string")),
            None => return Err(format!("missing required key `{key}`")),
        }
    }

    if let Some(description) = obj.get("description") {
        if !description.is_string() {
            return Err("`description` must be a string".to_string());
        }
    }

    for key in LIST_KEYS {
        match obj.get(key) {
            Some(Value::Array(items)) if items.iter().all(Value::is_string) => {}
            Some(Value::Array(_)) => return Err(format!("`{key}` must contain only strings")),
            Some(_) => return Err(format!("`{key}` must be an array")),
            None => return Err(format!("missing required key `{key}`")),
        }
    }

    Ok(())
}
