use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Structured marketing concept as returned by the model, before persistence.
///
/// `title` also accepts the legacy `headline` key some prompts produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedConcept {
    #[serde(alias = "headline")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub value_proposition: String,
    pub key_messages: Vec<String>,
    pub channels: Vec<String>,
    pub tone: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ConceptRow {
    pub id: Uuid,
    pub audience_id: Uuid,
    pub title: String,
    pub description: String,
    pub value_proposition: String,
    pub key_messages: Vec<String>,
    pub channels: Vec<String>,
    pub tone: String,
    pub call_to_action: String,
    pub created_at: DateTime<Utc>,
}
