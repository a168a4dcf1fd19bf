use async_trait::async_trait;
use tracing::debug;

use resource_view::{DeletableService, ResourceService};
use shared_api_client::HospitalApiClient;
use shared_models::{ApiError, Patient, PatientDraft, RecordId, ResourceKind};

#[derive(Clone)]
pub struct PatientService {
    client: HospitalApiClient,
}

impl PatientService {
    pub fn new(client: HospitalApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Patient>, ApiError> {
        debug!("Fetching all patients");
        self.client.get("/patients").await
    }

    pub async fn get_by_id(&self, id: RecordId) -> Result<Patient, ApiError> {
        debug!("Fetching patient: {}", id);
        self.client.get(&format!("/patients/{}", id)).await
    }
}

#[async_trait]
impl ResourceService for PatientService {
    type Record = Patient;
    type Draft = PatientDraft;
    type Scope = ();

    fn kind(&self) -> ResourceKind {
        ResourceKind::Patients
    }

    async fn list(&self, _scope: &()) -> Result<Vec<Patient>, ApiError> {
        self.get_all().await
    }

    async fn create(&self, draft: &PatientDraft) -> Result<Patient, ApiError> {
        debug!("Registering patient {} {}", draft.first_name, draft.last_name);
        self.client.post("/patients", draft).await
    }

    async fn update(&self, id: RecordId, draft: &PatientDraft) -> Result<Patient, ApiError> {
        debug!("Updating patient: {}", id);
        self.client.put(&format!("/patients/{}", id), draft).await
    }
}

#[async_trait]
impl DeletableService for PatientService {
    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        debug!("Deleting patient: {}", id);
        self.client.delete(&format!("/patients/{}", id)).await
    }
}
