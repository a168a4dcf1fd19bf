use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use resource_view::AppState;

use crate::handlers::*;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_doctors).post(create_doctor))
        .route("/{id}", post(update_doctor))
        .with_state(state)
}
