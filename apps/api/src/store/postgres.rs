use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;
use uuid::Uuid;

use crate::models::audience::{AudienceRow, AudienceWithConcepts, NewAudience};
use crate::models::concept::{ConceptRow, GeneratedConcept};
use crate::store::{attach_concepts, RecordStore, StoreError};

/// PostgreSQL-backed record store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_audience_row<'e, E: PgExecutor<'e>>(
    executor: E,
    fields: &NewAudience,
) -> Result<AudienceRow, sqlx::Error> {
    sqlx::query_as::<_, AudienceRow>(
        r#"
        INSERT INTO audiences (name, age_range, location, income, interests, pain_points, goals)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.age_range)
    .bind(&fields.location)
    .bind(&fields.income)
    .bind(&fields.interests)
    .bind(&fields.pain_points)
    .bind(&fields.goals)
    .fetch_one(executor)
    .await
}

async fn insert_concept_row<'e, E: PgExecutor<'e>>(
    executor: E,
    fields: &GeneratedConcept,
    audience_id: Uuid,
) -> Result<ConceptRow, sqlx::Error> {
    sqlx::query_as::<_, ConceptRow>(
        r#"
        INSERT INTO concepts
            (audience_id, title, description, value_proposition,
             key_messages, channels, tone, call_to_action)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(audience_id)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.value_proposition)
    .bind(&fields.key_messages)
    .bind(&fields.channels)
    .bind(&fields.tone)
    .bind(&fields.call_to_action)
    .fetch_one(executor)
    .await
}

#[async_trait]
impl RecordStore for PgStore {
    async fn insert_audience(&self, fields: &NewAudience) -> Result<AudienceRow, StoreError> {
        insert_audience_row(&self.pool, fields)
            .await
            .map_err(StoreError::write)
    }

    async fn insert_concept(
        &self,
        fields: &GeneratedConcept,
        audience_id: Uuid,
    ) -> Result<ConceptRow, StoreError> {
        insert_concept_row(&self.pool, fields, audience_id)
            .await
            .map_err(StoreError::write)
    }

    async fn get_audience_by_id(&self, id: Uuid) -> Result<AudienceRow, StoreError> {
        sqlx::query_as::<_, AudienceRow>("SELECT * FROM audiences WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::read)?
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_audiences_with_concepts(&self) -> Result<Vec<AudienceWithConcepts>, StoreError> {
        let audiences = sqlx::query_as::<_, AudienceRow>(
            "SELECT * FROM audiences ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::read)?;

        if audiences.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = audiences.iter().map(|a| a.id).collect();
        let concepts = sqlx::query_as::<_, ConceptRow>(
            "SELECT * FROM concepts WHERE audience_id = ANY($1) ORDER BY created_at ASC, id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::read)?;

        debug!(
            "Loaded {} audiences with {} concepts",
            audiences.len(),
            concepts.len()
        );

        Ok(attach_concepts(audiences, concepts))
    }

    /// Both inserts share one transaction, so a failed concept write leaves no audience behind.
    async fn insert_audience_with_concept(
        &self,
        fields: &NewAudience,
        concept: &GeneratedConcept,
    ) -> Result<(AudienceRow, ConceptRow), StoreError> {
        let mut tx = self.pool.begin().await.map_err(StoreError::write)?;

        let audience = insert_audience_row(&mut *tx, fields)
            .await
            .map_err(StoreError::write)?;
        let concept = insert_concept_row(&mut *tx, concept, audience.id)
            .await
            .map_err(StoreError::write)?;

        tx.commit().await.map_err(StoreError::write)?;
        Ok((audience, concept))
    }
}
