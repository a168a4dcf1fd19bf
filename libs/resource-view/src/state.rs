use std::sync::Arc;

use shared_api_client::HospitalApiClient;
use shared_config::AdminConfig;
use shared_models::ApiError;

use crate::reference::ReferenceData;

/// Everything a screen handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AdminConfig>,
    pub client: HospitalApiClient,
    pub reference: ReferenceData,
}

impl AppState {
    pub fn new(config: AdminConfig) -> Result<Self, ApiError> {
        let client = HospitalApiClient::new(&config)?;
        let reference = ReferenceData::new(config.reference_cache_ttl);

        Ok(Self {
            config: Arc::new(config),
            client,
            reference,
        })
    }

    pub fn operator_label(&self) -> &str {
        &self.config.operator_label
    }
}
