use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::debug;

use resource_view::{AppState, Confirmed, ListController, RemoveOutcome};
use shared_models::{AppError, PatientDraft, RecordId, ResourceKind};

use crate::models::{DeleteForm, PatientForm, PatientListQuery};
use crate::services::PatientService;
use crate::views;

fn controller(state: &AppState) -> ListController<PatientService> {
    ListController::new(PatientService::new(state.client.clone()))
}

fn parse_id(raw: &str) -> Result<RecordId, AppError> {
    RecordId::parse_selection(raw).ok_or_else(|| AppError::BadRequest(format!("Invalid patient id: {}", raw)))
}

pub async fn list_patients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PatientListQuery>,
) -> Html<String> {
    let mut controller = controller(&state);
    controller.load().await;
    controller.set_filter(query.search.clone());

    if query.wants_new_form() {
        controller.open_create(PatientDraft::default());
    } else if let Some(id) = query.edit.as_deref().and_then(RecordId::parse_selection) {
        if !controller.open_edit_for(id) {
            debug!("Patient {} not in list, edit form not opened", id);
        }
    }

    views::patients_page(state.operator_label(), &controller)
}

pub async fn create_patient(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PatientForm>,
) -> Html<String> {
    let mut controller = controller(&state);
    controller.open_create(form.into_draft());
    save(&state, controller).await
}

pub async fn update_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<PatientForm>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let mut controller = controller(&state);
    controller.open_edit(id, form.into_draft());
    Ok(save(&state, controller).await)
}

/// Submits the open form. The controller reloads on success; on failure the
/// list still has to be fetched once so the page can be drawn behind the
/// modal.
async fn save(state: &AppState, mut controller: ListController<PatientService>) -> Html<String> {
    match controller.submit().await {
        Ok(_) => state.reference.invalidate(ResourceKind::Patients).await,
        Err(_) => {
            controller.load().await;
        }
    }
    views::patients_page(state.operator_label(), &controller)
}

pub async fn confirm_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let patient = PatientService::new(state.client.clone()).get_by_id(id).await?;
    Ok(views::delete_confirm_page(state.operator_label(), &patient))
}

pub async fn delete_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let mut controller = controller(&state);

    match controller.remove(id, &Confirmed(form.is_confirmed())).await {
        Ok(RemoveOutcome::Declined) => return Ok(Redirect::to("/patients").into_response()),
        Ok(RemoveOutcome::Removed) => state.reference.invalidate(ResourceKind::Patients).await,
        Err(_) => {
            controller.load().await;
        }
    }

    Ok(views::patients_page(state.operator_label(), &controller).into_response())
}
