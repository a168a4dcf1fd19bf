use std::sync::Arc;

use axum::{routing::get, Router};

use resource_view::AppState;

use crate::handlers::show_dashboard;

pub fn dashboard_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_dashboard))
        .with_state(state)
}
