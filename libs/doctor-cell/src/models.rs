use serde::Deserialize;

use shared_models::DoctorDraft;
use shared_utils::form::{checkbox, number_or_default};

#[derive(Debug, Default, Deserialize)]
pub struct DoctorListQuery {
    #[serde(default)]
    pub search: String,
    pub form: Option<String>,
    pub edit: Option<String>,
}

impl DoctorListQuery {
    pub fn wants_new_form(&self) -> bool {
        self.form.as_deref() == Some("new")
    }
}

/// The doctor modal as submitted by the browser. `is_active` is only present
/// on the edit form; an unchecked box is simply missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DoctorForm {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub qualification: String,
    pub experience: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub consultation_fee: String,
    pub available_from: String,
    pub available_to: String,
    pub is_active: Option<String>,
    pub editing: Option<String>,
}

impl DoctorForm {
    pub fn into_draft(self) -> DoctorDraft {
        let defaults = DoctorDraft::default();
        let is_active = self
            .editing
            .as_ref()
            .map(|_| checkbox(self.is_active.as_deref()));

        DoctorDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            specialization: self.specialization.trim().to_string(),
            qualification: self.qualification.trim().to_string(),
            experience: number_or_default(&self.experience),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
            consultation_fee: number_or_default(&self.consultation_fee),
            available_from: if self.available_from.is_empty() {
                defaults.available_from
            } else {
                self.available_from
            },
            available_to: if self.available_to.is_empty() {
                defaults.available_to
            } else {
                self.available_to
            },
            is_active,
        }
    }
}
