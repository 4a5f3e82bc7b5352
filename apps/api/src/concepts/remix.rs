//! Concept Remix: regenerates a concept for an existing audience.
//!
//! Flow: fetch audience → merge stored fields with extra context →
//!       produce → persist under the same audience_id → return the new concept.

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::concepts::producer::ConceptProducer;
use crate::errors::AppError;
use crate::models::concept::ConceptRow;
use crate::store::RecordStore;

/// Request body for a remix. `additionalData` is accepted for older clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixRequest {
    pub audience_id: Uuid,
    #[serde(default, alias = "additionalData")]
    pub additional_context: Option<String>,
}

/// Runs the remix. An unknown audience fails with `NotFound` before the producer is called.
pub async fn remix_concept(
    store: &dyn RecordStore,
    producer: &ConceptProducer,
    request: RemixRequest,
) -> Result<ConceptRow, AppError> {
    let audience = store.get_audience_by_id(request.audience_id).await?;

    let context = request
        .additional_context
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    info!(
        "Remixing concept for audience {} (extra context: {})",
        audience.id,
        context.is_some()
    );

    let generated = producer.generate_concept(&audience.profile(), context).await?;
    let concept = store.insert_concept(&generated, audience.id).await?;

    info!("Stored remixed concept {} for audience {}", concept.id, audience.id);
    Ok(concept)
}
