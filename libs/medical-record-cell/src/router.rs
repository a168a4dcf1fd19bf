use std::sync::Arc;

use axum::{routing::get, Router};

use resource_view::AppState;

use crate::handlers::*;

pub fn medical_record_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route("/{id}", get(show_record))
        .with_state(state)
}
