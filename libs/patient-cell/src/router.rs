use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use resource_view::AppState;

use crate::handlers::*;

pub fn patient_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route("/{id}", post(update_patient))
        .route("/{id}/delete", get(confirm_delete).post(delete_patient))
        .with_state(state)
}
