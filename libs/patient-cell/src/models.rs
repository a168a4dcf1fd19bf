use serde::Deserialize;

use shared_models::PatientDraft;
use shared_utils::form::{non_empty, number_or_default};

/// Query string of the patients screen.
#[derive(Debug, Default, Deserialize)]
pub struct PatientListQuery {
    #[serde(default)]
    pub search: String,
    pub form: Option<String>,
    pub edit: Option<String>,
}

impl PatientListQuery {
    pub fn wants_new_form(&self) -> bool {
        self.form.as_deref() == Some("new")
    }
}

/// The patient modal as submitted by the browser.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub emergency_contact: String,
    pub blood_group: String,
}

impl PatientForm {
    pub fn into_draft(self) -> PatientDraft {
        PatientDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            age: number_or_default(&self.age),
            phone: self.phone.trim().to_string(),
            email: non_empty(self.email),
            address: non_empty(self.address),
            city: non_empty(self.city),
            state: non_empty(self.state),
            pincode: non_empty(self.pincode),
            emergency_contact: non_empty(self.emergency_contact),
            blood_group: non_empty(self.blood_group),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: String,
}

impl DeleteForm {
    pub fn is_confirmed(&self) -> bool {
        self.confirm == "yes"
    }
}
