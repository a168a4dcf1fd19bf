use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::resource::{EditableRecord, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: RecordId,
    pub doctor_id: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub qualification: String,
    pub experience: u32,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub consultation_fee: f64,
    pub available_from: String,
    pub available_to: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}

fn default_active() -> bool {
    true
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn display_name(&self) -> String {
        format!("Dr. {}", self.full_name())
    }

    pub fn availability(&self) -> String {
        format!("{} - {}", self.available_from, self.available_to)
    }
}

impl ResourceRecord for Doctor {
    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.full_name()),
            Cow::Borrowed(self.specialization.as_str()),
            Cow::Borrowed(self.department.as_str()),
        ]
    }
}

impl EditableRecord for Doctor {
    type Draft = DoctorDraft;

    fn to_draft(&self) -> DoctorDraft {
        DoctorDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            specialization: self.specialization.clone(),
            qualification: self.qualification.clone(),
            experience: self.experience,
            phone: self.phone.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
            consultation_fee: self.consultation_fee,
            available_from: self.available_from.clone(),
            available_to: self.available_to.clone(),
            is_active: Some(self.is_active),
        }
    }
}

/// Body of `POST /doctors` and `PUT /doctors/{id}`. `is_active` is only sent
/// on updates; the backend activates new doctors itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorDraft {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub qualification: String,
    pub experience: u32,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub consultation_fee: f64,
    pub available_from: String,
    pub available_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Default for DoctorDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            specialization: String::new(),
            qualification: String::new(),
            experience: 0,
            phone: String::new(),
            email: String::new(),
            department: String::new(),
            consultation_fee: 0.0,
            available_from: "09:00".to_string(),
            available_to: "17:00".to_string(),
            is_active: None,
        }
    }
}
