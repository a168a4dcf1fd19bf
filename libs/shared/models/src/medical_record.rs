use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::doctor::Doctor;
use crate::ids::RecordId;
use crate::patient::Patient;
use crate::resource::ResourceRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: RecordId,
    pub record_id: String,
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub diagnosis: String,
    pub symptoms: Option<String>,
    pub prescription: Option<String>,
    pub tests_recommended: Option<String>,
    pub advice: Option<String>,
    pub visit_date: String,
    pub next_visit: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub doctor: Option<Doctor>,
}

impl ResourceRecord for MedicalRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.record_id.as_str()),
            Cow::Borrowed(self.diagnosis.as_str()),
        ]
    }
}

/// Body of `POST /medical-records`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecordDraft {
    pub patient_id: Option<RecordId>,
    pub doctor_id: Option<RecordId>,
    pub diagnosis: String,
    pub symptoms: Option<String>,
    pub prescription: Option<String>,
    pub tests_recommended: Option<String>,
    pub advice: Option<String>,
    pub visit_date: String,
    pub next_visit: Option<String>,
}

impl MedicalRecordDraft {
    /// Fresh draft for the selected patient, dated today.
    pub fn for_patient(patient_id: Option<RecordId>, today: String) -> Self {
        Self {
            patient_id,
            visit_date: today,
            ..Self::default()
        }
    }
}
