use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};
use tracing::error;

use doctor_cell::services::DoctorService;
use patient_cell::services::PatientService;
use resource_view::{AppState, ListController};
use shared_models::{AppError, AppointmentDraft, RecordId};

use crate::models::{AppointmentForm, AppointmentListQuery, StatusForm};
use crate::services::AppointmentService;
use crate::views::{self, BookingChoices};

fn controller(state: &AppState) -> ListController<AppointmentService> {
    ListController::new(AppointmentService::new(state.client.clone()))
}

/// Draws the screen. Dropdown data is only fetched while the booking form
/// is open.
async fn render(state: &AppState, controller: &ListController<AppointmentService>) -> Html<String> {
    if controller.form().is_none() {
        let choices = BookingChoices { patients: &[], doctors: &[] };
        return views::appointments_page(state.operator_label(), controller, &choices);
    }

    let patient_service = PatientService::new(state.client.clone());
    let doctor_service = DoctorService::new(state.client.clone());
    let (patients, doctors) = futures::join!(
        state.reference.patients_or_empty(|| patient_service.get_all()),
        state.reference.doctors_or_empty(|| doctor_service.get_all()),
    );

    let choices = BookingChoices {
        patients: &patients,
        doctors: &doctors,
    };
    views::appointments_page(state.operator_label(), controller, &choices)
}

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AppointmentListQuery>,
) -> Html<String> {
    let mut controller = controller(&state);
    controller.load().await;
    controller.set_filter(query.search.clone());

    if query.wants_new_form() {
        controller.open_create(AppointmentDraft::default());
    }

    render(&state, &controller).await
}

pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AppointmentForm>,
) -> Html<String> {
    let mut controller = controller(&state);
    controller.open_create(form.into_draft());

    if controller.submit().await.is_err() {
        controller.load().await;
    }

    render(&state, &controller).await
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Html<String>, AppError> {
    let id = RecordId::parse_selection(&id)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid appointment id: {}", id)))?;
    let mut controller = controller(&state);

    if let Err(e) = controller.service().update_status(id, &form.target()).await {
        error!("Error updating appointment status: {}", e);
    }
    controller.load().await;

    Ok(render(&state, &controller).await)
}
