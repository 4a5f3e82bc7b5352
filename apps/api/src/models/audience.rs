use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::concept::ConceptRow;

/// Caller-supplied audience fields. Field names follow the intake form (camelCase).
///
/// Missing or `null` fields deserialize as empty so `validate_audience` can report
/// them alongside every other problem with the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAudience {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age_range: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub income: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pain_points: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AudienceRow {
    pub id: Uuid,
    pub name: String,
    pub age_range: String,
    pub location: String,
    pub income: String,
    pub interests: Vec<String>,
    pub pain_points: String,
    pub goals: String,
    pub created_at: DateTime<Utc>,
}

impl AudienceRow {
    /// The descriptive fields of a stored audience, without store-assigned columns.
    pub fn profile(&self) -> NewAudience {
        NewAudience {
            name: self.name.clone(),
            age_range: self.age_range.clone(),
            location: self.location.clone(),
            income: self.income.clone(),
            interests: self.interests.clone(),
            pain_points: self.pain_points.clone(),
            goals: self.goals.clone(),
        }
    }
}

/// An audience together with every concept generated for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceWithConcepts {
    #[serde(flatten)]
    pub audience: AudienceRow,
    pub concepts: Vec<ConceptRow>,
}
