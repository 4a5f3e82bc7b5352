//! Audience Intake: validates a submission, generates its first concept, stores both.
//!
//! Flow: validate → produce concept → insert audience → insert concept → return pair.
//!
//! The concept is generated BEFORE anything is written, so a producer failure leaves
//! no audience behind. The two inserts go through `insert_audience_with_concept`;
//! the Postgres store runs them in one transaction.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::audiences::validation::validate_audience;
use crate::concepts::producer::ConceptProducer;
use crate::errors::AppError;
use crate::models::audience::{AudienceRow, NewAudience};
use crate::models::concept::ConceptRow;
use crate::store::RecordStore;

/// Response from the intake workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeResponse {
    pub audience: AudienceRow,
    pub concept: ConceptRow,
}

/// Runs the intake workflow for one submission.
///
/// Steps:
/// 1. validate_audience() → normalized fields (no I/O on failure)
/// 2. producer.generate_concept() → GeneratedConcept
/// 3. INSERT into audiences
/// 4. INSERT into concepts with the new audience_id
pub async fn create_audience_and_concept(
    store: &dyn RecordStore,
    producer: &ConceptProducer,
    input: NewAudience,
) -> Result<IntakeResponse, AppError> {
    // Step 1: Validate
    let fields = validate_audience(&input).map_err(|e| AppError::Validation(e.to_string()))?;

    // Step 2: Generate
    info!("Generating concept for new audience '{}'", fields.name);
    let generated = producer.generate_concept(&fields, None).await?;

    // Steps 3-4: Persist
    let (audience, concept) = store
        .insert_audience_with_concept(&fields, &generated)
        .await?;

    info!(
        "Created audience {} with concept {}",
        audience.id, concept.id
    );

    Ok(IntakeResponse { audience, concept })
}
