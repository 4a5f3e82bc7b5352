pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::audiences::handlers as audiences;
use crate::concepts::handlers as concepts;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/audiences",
            get(audiences::handle_list_audiences).post(audiences::handle_create_audience),
        )
        .route("/api/v1/audiences/:id", get(audiences::handle_get_audience))
        .route("/api/v1/concepts/remix", post(concepts::handle_remix_concept))
        .with_state(state)
}
