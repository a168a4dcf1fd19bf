use serde::Deserialize;

use shared_models::{MedicalRecordDraft, RecordId};
use shared_utils::form::non_empty;

#[derive(Debug, Default, Deserialize)]
pub struct RecordListQuery {
    pub patient_id: Option<String>,
    #[serde(default)]
    pub search: String,
    pub form: Option<String>,
}

impl RecordListQuery {
    /// `0`, blank or missing all mean "no patient selected".
    pub fn selected_patient(&self) -> Option<RecordId> {
        self.patient_id.as_deref().and_then(RecordId::parse_selection)
    }

    pub fn wants_new_form(&self) -> bool {
        self.form.as_deref() == Some("new")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MedicalRecordForm {
    pub patient_id: String,
    pub doctor_id: String,
    pub diagnosis: String,
    pub symptoms: String,
    pub prescription: String,
    pub tests_recommended: String,
    pub advice: String,
    pub visit_date: String,
    pub next_visit: String,
}

impl MedicalRecordForm {
    pub fn into_draft(self) -> MedicalRecordDraft {
        MedicalRecordDraft {
            patient_id: RecordId::parse_selection(&self.patient_id),
            doctor_id: RecordId::parse_selection(&self.doctor_id),
            diagnosis: self.diagnosis.trim().to_string(),
            symptoms: non_empty(self.symptoms),
            prescription: non_empty(self.prescription),
            tests_recommended: non_empty(self.tests_recommended),
            advice: non_empty(self.advice),
            visit_date: self.visit_date,
            next_visit: non_empty(self.next_visit),
        }
    }
}
