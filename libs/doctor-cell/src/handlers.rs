use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};
use tracing::debug;

use resource_view::{AppState, ListController};
use shared_models::{AppError, DoctorDraft, RecordId, ResourceKind};

use crate::models::{DoctorForm, DoctorListQuery};
use crate::services::DoctorService;
use crate::views;

fn controller(state: &AppState) -> ListController<DoctorService> {
    ListController::new(DoctorService::new(state.client.clone()))
}

pub async fn list_doctors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DoctorListQuery>,
) -> Html<String> {
    let mut controller = controller(&state);
    controller.load().await;
    controller.set_filter(query.search.clone());

    if query.wants_new_form() {
        controller.open_create(DoctorDraft::default());
    } else if let Some(id) = query.edit.as_deref().and_then(RecordId::parse_selection) {
        if !controller.open_edit_for(id) {
            debug!("Doctor {} not in list, edit form not opened", id);
        }
    }

    views::doctors_page(state.operator_label(), &controller)
}

pub async fn create_doctor(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DoctorForm>,
) -> Html<String> {
    let mut controller = controller(&state);
    controller.open_create(form.into_draft());
    save(&state, controller).await
}

pub async fn update_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<DoctorForm>,
) -> Result<Html<String>, AppError> {
    let id = RecordId::parse_selection(&id)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid doctor id: {}", id)))?;
    let mut controller = controller(&state);
    controller.open_edit(id, form.into_draft());
    Ok(save(&state, controller).await)
}

async fn save(state: &AppState, mut controller: ListController<DoctorService>) -> Html<String> {
    match controller.submit().await {
        Ok(doctor) => {
            debug!("Saved doctor {}", doctor.doctor_id);
            state.reference.invalidate(ResourceKind::Doctors).await;
        }
        Err(_) => {
            controller.load().await;
        }
    }
    views::doctors_page(state.operator_label(), &controller)
}
