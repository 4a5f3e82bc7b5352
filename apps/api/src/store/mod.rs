//! Record Store: durable storage for audiences and their generated concepts.
//!
//! Two collections linked by `concepts.audience_id`. No business logic lives here;
//! the workflows in `audiences` and `concepts` decide what gets written and when.
//!
//! `AppState` holds an `Arc<dyn RecordStore>`: `PgStore` in production,
//! `MemoryStore` in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::audience::{AudienceRow, AudienceWithConcepts, NewAudience};
use crate::models::concept::{ConceptRow, GeneratedConcept};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("write failed: {0}")]
    Write(String),

    #[error("read failed: {0}")]
    Read(String),

    #[error("audience {0} not found")]
    NotFound(Uuid),

    /// The audience insert committed, the concept insert did not.
    #[error("audience {audience_id} written but concept write failed: {source}")]
    PartialWrite {
        audience_id: Uuid,
        source: Box<StoreError>,
    },
}

impl StoreError {
    pub(crate) fn write(err: sqlx::Error) -> Self {
        StoreError::Write(err.to_string())
    }

    pub(crate) fn read(err: sqlx::Error) -> Self {
        StoreError::Read(err.to_string())
    }
}

/// The store contract. Every call is a single attempt; failures surface immediately.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts an audience; the store assigns `id` and `created_at`.
    async fn insert_audience(&self, fields: &NewAudience) -> Result<AudienceRow, StoreError>;

    /// Inserts a concept owned by `audience_id`. Fails if the audience does not exist.
    async fn insert_concept(
        &self,
        fields: &GeneratedConcept,
        audience_id: Uuid,
    ) -> Result<ConceptRow, StoreError>;

    async fn get_audience_by_id(&self, id: Uuid) -> Result<AudienceRow, StoreError>;

    /// All audiences, newest first, each paired with its concepts in insertion order.
    async fn list_audiences_with_concepts(&self) -> Result<Vec<AudienceWithConcepts>, StoreError>;

    /// Writes an audience and its first concept.
    ///
    /// The default runs the two inserts back to back; a failed concept insert leaves the
    /// audience in place and is reported as `PartialWrite`. Stores with transactions
    /// override this to make both writes atomic.
    async fn insert_audience_with_concept(
        &self,
        fields: &NewAudience,
        concept: &GeneratedConcept,
    ) -> Result<(AudienceRow, ConceptRow), StoreError> {
        let audience = self.insert_audience(fields).await?;
        match self.insert_concept(concept, audience.id).await {
            Ok(concept) => Ok((audience, concept)),
            Err(e) => Err(StoreError::PartialWrite {
                audience_id: audience.id,
                source: Box::new(e),
            }),
        }
    }
}

/// Pairs each audience with its concepts, preserving the order of both inputs.
/// Concepts whose audience is not in `audiences` are dropped.
pub fn attach_concepts(
    audiences: Vec<AudienceRow>,
    concepts: Vec<ConceptRow>,
) -> Vec<AudienceWithConcepts> {
    let mut by_audience: HashMap<Uuid, Vec<ConceptRow>> = HashMap::new();
    for concept in concepts {
        by_audience
            .entry(concept.audience_id)
            .or_default()
            .push(concept);
    }

    audiences
        .into_iter()
        .map(|audience| {
            let concepts = by_audience.remove(&audience.id).unwrap_or_default();
            AudienceWithConcepts { audience, concepts }
        })
        .collect()
}
