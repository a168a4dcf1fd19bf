use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use resource_view::AppState;

use crate::handlers::*;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route("/{id}/status", post(update_status))
        .with_state(state)
}
