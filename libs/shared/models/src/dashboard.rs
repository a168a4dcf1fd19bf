use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_patients: u64,
    #[serde(default)]
    pub total_doctors: u64,
    #[serde(default)]
    pub total_appointments: u64,
    #[serde(default)]
    pub today_appointments: u64,
}
