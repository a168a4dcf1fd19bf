use chrono::NaiveDate;
use tracing::debug;

use appointment_cell::services::AppointmentService;
use shared_api_client::HospitalApiClient;
use shared_models::dates::is_on;
use shared_models::{ApiError, Appointment, DashboardStats};

pub struct DashboardService {
    client: HospitalApiClient,
}

impl DashboardService {
    pub fn new(client: HospitalApiClient) -> Self {
        Self { client }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        debug!("Fetching dashboard stats");
        self.client.get("/admin/dashboard").await
    }

    /// Appointments on `day`, earliest slot first.
    pub async fn appointments_on(&self, day: NaiveDate) -> Result<Vec<Appointment>, ApiError> {
        let all = AppointmentService::new(self.client.clone()).get_all().await?;

        let mut todays: Vec<Appointment> = all
            .into_iter()
            .filter(|a| is_on(&a.appointment_date, day))
            .collect();
        todays.sort_by(|a, b| a.appointment_time.cmp(&b.appointment_time));

        debug!("{} appointments on {}", todays.len(), day);
        Ok(todays)
    }
}
