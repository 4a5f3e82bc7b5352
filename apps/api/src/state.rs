use std::sync::Arc;

use crate::concepts::producer::ConceptProducer;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record store. Default: PgStore.
    pub store: Arc<dyn RecordStore>,
    pub producer: ConceptProducer,
}
