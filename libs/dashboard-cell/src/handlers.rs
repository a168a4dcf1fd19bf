use std::sync::Arc;

use axum::{extract::State, response::Html};
use tracing::error;

use resource_view::AppState;
use shared_models::dates;

use crate::services::DashboardService;
use crate::views;

pub async fn show_dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let service = DashboardService::new(state.client.clone());
    let (stats, todays) = futures::join!(service.get_stats(), service.appointments_on(dates::today()));

    let stats = match stats {
        Ok(stats) => stats,
        Err(e) => {
            error!("Error loading dashboard: {}", e);
            return views::dashboard_error_page(state.operator_label(), &e.to_string());
        }
    };

    let todays = todays.unwrap_or_else(|e| {
        error!("Error fetching today's appointments: {}", e);
        Vec::new()
    });

    views::dashboard_page(state.operator_label(), &stats, &todays)
}
