use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};

use doctor_cell::services::DoctorService;
use patient_cell::services::PatientService;
use resource_view::{AppState, ListController};
use shared_models::dates::today_string;
use shared_models::{AppError, Doctor, MedicalRecordDraft, Patient, RecordId};

use crate::models::{MedicalRecordForm, RecordListQuery};
use crate::services::MedicalRecordService;
use crate::views::{self, Directory};

fn controller(state: &AppState, patient: Option<RecordId>) -> ListController<MedicalRecordService> {
    ListController::with_scope(MedicalRecordService::new(state.client.clone()), patient)
}

async fn reference_lists(state: &AppState) -> (Arc<Vec<Patient>>, Arc<Vec<Doctor>>) {
    let patient_service = PatientService::new(state.client.clone());
    let doctor_service = DoctorService::new(state.client.clone());
    futures::join!(
        state.reference.patients_or_empty(|| patient_service.get_all()),
        state.reference.doctors_or_empty(|| doctor_service.get_all()),
    )
}

async fn render(state: &AppState, controller: &ListController<MedicalRecordService>) -> Html<String> {
    let (patients, doctors) = reference_lists(state).await;
    let directory = Directory {
        patients: &patients,
        doctors: &doctors,
    };
    views::records_page(state.operator_label(), controller, &directory)
}

pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecordListQuery>,
) -> Html<String> {
    let selected = query.selected_patient();
    let mut controller = controller(&state, selected);
    controller.load().await;
    controller.set_filter(query.search.clone());

    if query.wants_new_form() && selected.is_some() {
        controller.open_create(MedicalRecordDraft::for_patient(selected, today_string()));
    }

    render(&state, &controller).await
}

/// Saves a record and shows the list for the patient it was filed under.
pub async fn create_record(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MedicalRecordForm>,
) -> Html<String> {
    let draft = form.into_draft();
    let mut controller = controller(&state, draft.patient_id);
    controller.open_create(draft);

    if controller.submit().await.is_err() {
        controller.load().await;
    }

    render(&state, &controller).await
}

pub async fn show_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = RecordId::parse_selection(&id)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid medical record id: {}", id)))?;
    let record = MedicalRecordService::new(state.client.clone()).get_by_id(id).await?;

    let (patients, doctors) = reference_lists(&state).await;
    let directory = Directory {
        patients: &patients,
        doctors: &doctors,
    };
    Ok(views::record_detail_page(state.operator_label(), &record, &directory))
}
