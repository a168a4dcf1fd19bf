use async_trait::async_trait;
use tracing::debug;

use resource_view::ResourceService;
use shared_api_client::HospitalApiClient;
use shared_models::{ApiError, Doctor, DoctorDraft, RecordId, ResourceKind};

#[derive(Clone)]
pub struct DoctorService {
    client: HospitalApiClient,
}

impl DoctorService {
    pub fn new(client: HospitalApiClient) -> Self {
        Self { client }
    }

    /// The backend only lists active doctors.
    pub async fn get_all(&self) -> Result<Vec<Doctor>, ApiError> {
        debug!("Fetching all doctors");
        self.client.get("/doctors").await
    }

    pub async fn get_by_id(&self, id: RecordId) -> Result<Doctor, ApiError> {
        debug!("Fetching doctor: {}", id);
        self.client.get(&format!("/doctors/{}", id)).await
    }
}

#[async_trait]
impl ResourceService for DoctorService {
    type Record = Doctor;
    type Draft = DoctorDraft;
    type Scope = ();

    fn kind(&self) -> ResourceKind {
        ResourceKind::Doctors
    }

    async fn list(&self, _scope: &()) -> Result<Vec<Doctor>, ApiError> {
        self.get_all().await
    }

    async fn create(&self, draft: &DoctorDraft) -> Result<Doctor, ApiError> {
        debug!("Adding doctor {} {}", draft.first_name, draft.last_name);
        let body = DoctorDraft {
            is_active: None,
            ..draft.clone()
        };
        self.client.post("/doctors", &body).await
    }

    async fn update(&self, id: RecordId, draft: &DoctorDraft) -> Result<Doctor, ApiError> {
        debug!("Updating doctor: {}", id);
        self.client.put(&format!("/doctors/{}", id), draft).await
    }
}
