use async_trait::async_trait;
use tracing::{debug, info};

use resource_view::ResourceService;
use shared_api_client::HospitalApiClient;
use shared_models::{
    ApiError, Appointment, AppointmentDraft, AppointmentStatus, RecordId, ResourceKind,
};

#[derive(Clone)]
pub struct AppointmentService {
    client: HospitalApiClient,
}

impl AppointmentService {
    pub fn new(client: HospitalApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Appointment>, ApiError> {
        debug!("Fetching all appointments");
        self.client.get("/appointments").await
    }

    pub async fn get_by_id(&self, id: RecordId) -> Result<Appointment, ApiError> {
        debug!("Fetching appointment: {}", id);
        self.client.get(&format!("/appointments/{}", id)).await
    }

    /// Moves an appointment to `status`. The backend accepts any value; the
    /// console only offers the transitions the current status allows.
    pub async fn update_status(&self, id: RecordId, status: &AppointmentStatus) -> Result<(), ApiError> {
        let path = format!(
            "/appointments/{}/status?status={}",
            id,
            urlencoding::encode(status.as_str())
        );
        self.client.patch(&path).await?;

        info!("Appointment {} marked {}", id, status);
        Ok(())
    }
}

#[async_trait]
impl ResourceService for AppointmentService {
    type Record = Appointment;
    type Draft = AppointmentDraft;
    type Scope = ();

    fn kind(&self) -> ResourceKind {
        ResourceKind::Appointments
    }

    async fn list(&self, _scope: &()) -> Result<Vec<Appointment>, ApiError> {
        self.get_all().await
    }

    async fn create(&self, draft: &AppointmentDraft) -> Result<Appointment, ApiError> {
        debug!(
            "Booking appointment on {} at {}",
            draft.appointment_date, draft.appointment_time
        );
        self.client.post("/appointments", draft).await
    }
}
