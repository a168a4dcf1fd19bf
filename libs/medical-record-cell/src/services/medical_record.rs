use async_trait::async_trait;
use tracing::debug;

use resource_view::ResourceService;
use shared_api_client::HospitalApiClient;
use shared_models::{ApiError, MedicalRecord, MedicalRecordDraft, RecordId, ResourceKind};

#[derive(Clone)]
pub struct MedicalRecordService {
    client: HospitalApiClient,
}

impl MedicalRecordService {
    pub fn new(client: HospitalApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_patient(&self, patient_id: RecordId) -> Result<Vec<MedicalRecord>, ApiError> {
        debug!("Fetching medical records for patient: {}", patient_id);
        self.client
            .get(&format!("/medical-records/patient/{}", patient_id))
            .await
    }

    pub async fn get_by_id(&self, id: RecordId) -> Result<MedicalRecord, ApiError> {
        debug!("Fetching medical record: {}", id);
        self.client.get(&format!("/medical-records/{}", id)).await
    }
}

/// Records are always listed per patient; with no patient selected the list
/// is empty and the backend is not asked.
#[async_trait]
impl ResourceService for MedicalRecordService {
    type Record = MedicalRecord;
    type Draft = MedicalRecordDraft;
    type Scope = Option<RecordId>;

    fn kind(&self) -> ResourceKind {
        ResourceKind::MedicalRecords
    }

    async fn list(&self, scope: &Option<RecordId>) -> Result<Vec<MedicalRecord>, ApiError> {
        match scope {
            Some(patient_id) => self.get_by_patient(*patient_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn create(&self, draft: &MedicalRecordDraft) -> Result<MedicalRecord, ApiError> {
        self.client.post("/medical-records", draft).await
    }
}
