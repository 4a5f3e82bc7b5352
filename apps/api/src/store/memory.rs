//! In-process record store for tests. Uses the trait's sequential
//! `insert_audience_with_concept`, so partial writes are observable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::audience::{AudienceRow, AudienceWithConcepts, NewAudience};
use crate::models::concept::{ConceptRow, GeneratedConcept};
use crate::store::{attach_concepts, RecordStore, StoreError};

#[derive(Default)]
struct Tables {
    audiences: Vec<AudienceRow>,
    concepts: Vec<ConceptRow>,
    ticks: i64,
}

impl Tables {
    /// Strictly increasing timestamps so ordering by `created_at` is deterministic.
    fn next_timestamp(&mut self, epoch: DateTime<Utc>) -> DateTime<Utc> {
        self.ticks += 1;
        epoch + Duration::seconds(self.ticks)
    }
}

pub struct MemoryStore {
    tables: Mutex<Tables>,
    epoch: DateTime<Utc>,
    fail_audience_writes: AtomicBool,
    fail_concept_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            epoch: Utc::now(),
            fail_audience_writes: AtomicBool::new(false),
            fail_concept_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
        }
    }

    pub fn fail_audience_writes(&self, fail: bool) {
        self.fail_audience_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_concept_writes(&self, fail: bool) {
        self.fail_concept_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn audience_count(&self) -> usize {
        self.tables.lock().unwrap().audiences.len()
    }

    pub fn concept_count(&self) -> usize {
        self.tables.lock().unwrap().concepts.len()
    }

    pub fn concepts_for(&self, audience_id: Uuid) -> Vec<ConceptRow> {
        self.tables
            .lock()
            .unwrap()
            .concepts
            .iter()
            .filter(|c| c.audience_id == audience_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_audience(&self, fields: &NewAudience) -> Result<AudienceRow, StoreError> {
        if self.fail_audience_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("audience insert rejected".to_string()));
        }
        let mut tables = self.tables.lock().unwrap();
        let row = AudienceRow {
            id: Uuid::new_v4(),
            name: fields.name.clone(),
            age_range: fields.age_range.clone(),
            location: fields.location.clone(),
            income: fields.income.clone(),
            interests: fields.interests.clone(),
            pain_points: fields.pain_points.clone(),
            goals: fields.goals.clone(),
            created_at: tables.next_timestamp(self.epoch),
        };
        tables.audiences.push(row.clone());
        Ok(row)
    }

    async fn insert_concept(
        &self,
        fields: &GeneratedConcept,
        audience_id: Uuid,
    ) -> Result<ConceptRow, StoreError> {
        if self.fail_concept_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("concept insert rejected".to_string()));
        }
        let mut tables = self.tables.lock().unwrap();
        if !tables.audiences.iter().any(|a| a.id == audience_id) {
            return Err(StoreError::Write(format!(
                "foreign key violation: audience {audience_id} does not exist"
            )));
        }
        let row = ConceptRow {
            id: Uuid::new_v4(),
            audience_id,
            title: fields.title.clone(),
            description: fields.description.clone(),
            value_proposition: fields.value_proposition.clone(),
            key_messages: fields.key_messages.clone(),
            channels: fields.channels.clone(),
            tone: fields.tone.clone(),
            call_to_action: fields.call_to_action.clone(),
            created_at: tables.next_timestamp(self.epoch),
        };
        tables.concepts.push(row.clone());
        Ok(row)
    }

    async fn get_audience_by_id(&self, id: Uuid) -> Result<AudienceRow, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read("connection refused".to_string()));
        }
        self.tables
            .lock()
            .unwrap()
            .audiences
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_audiences_with_concepts(&self) -> Result<Vec<AudienceWithConcepts>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read("connection refused".to_string()));
        }
        let tables = self.tables.lock().unwrap();
        let mut audiences = tables.audiences.clone();
        audiences.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let mut concepts = tables.concepts.clone();
        concepts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(attach_concepts(audiences, concepts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech_millennials() -> NewAudience {
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

    fn sample_concept() -> GeneratedConcept {
        GeneratedConcept {
            title: "Upgrade Your Everyday".to_string(),
            description: "Smart gadgets for busy city life".to_string(),
            value_proposition: "Tech that saves time".to_string(),
            key_messages: vec!["Fast".to_string(), "Simple".to_string()],
            channels: vec!["Instagram".to_string()],
            tone: "Upbeat".to_string(),
            call_to_action: "Shop now".to_string(),
        }
    }

    #[tokio::test]
    async fn test_audience_round_trip_by_id() {
        let store = MemoryStore::new();
        let fields = tech_millennials();
        let written = store.insert_audience(&fields).await.unwrap();
        let read = store.get_audience_by_id(written.id).await.unwrap();
        assert_eq!(read, written);
        assert_eq!(read.profile(), fields);
    }

    #[tokio::test]
    async fn test_concept_requires_existing_audience() {
        let store = MemoryStore::new();
        let result = store.insert_concept(&sample_concept(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(StoreError::Write(_))));
        assert_eq!(store.concept_count(), 0);
    }

    #[tokio::test]
    async fn test_sequential_write_reports_partial_failure() {
        let store = MemoryStore::new();
        store.fail_concept_writes(true);

        let result = store
            .insert_audience_with_concept(&tech_millennials(), &sample_concept())
            .await;

        match result {
            Err(StoreError::PartialWrite { audience_id, .. }) => {
                assert!(store.get_audience_by_id(audience_id).await.is_ok());
            }
            other => panic!("expected PartialWrite, got {other:?}"),
        }
        assert_eq!(store.audience_count(), 1);
        assert_eq!(store.concept_count(), 0);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let store = MemoryStore::new();
        let mut first = tech_millennials();
        first.name = "First".to_string();
        let mut second = tech_millennials();
        second.name = "Second".to_string();

        let a = store.insert_audience(&first).await.unwrap();
        let b = store.insert_audience(&second).await.unwrap();
        store.insert_concept(&sample_concept(), a.id).await.unwrap();

        let listed = store.list_audiences_with_concepts().await.unwrap();
        assert_eq!(listed[0].audience.id, b.id);
        assert_eq!(listed[1].audience.id, a.id);
        assert!(listed[0].concepts.is_empty());
        assert_eq!(listed[1].concepts.len(), 1);
        assert!(listed[0].audience.created_at > listed[1].audience.created_at);
    }
}
