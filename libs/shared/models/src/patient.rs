use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::dates::date_only;
use crate::ids::RecordId;
use crate::resource::{EditableRecord, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: RecordId,
    pub uhid: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub age: u32,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub emergency_contact: Option<String>,
    pub blood_group: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// City and state joined for the address column, skipping blanks.
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

impl ResourceRecord for Patient {
    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.full_name()),
            Cow::Borrowed(self.uhid.as_str()),
            Cow::Borrowed(self.phone.as_str()),
        ]
    }
}

impl EditableRecord for Patient {
    type Draft = PatientDraft;

    fn to_draft(&self) -> PatientDraft {
        PatientDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            date_of_birth: date_only(&self.date_of_birth),
            age: self.age,
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            pincode: self.pincode.clone(),
            emergency_contact: self.emergency_contact.clone(),
            blood_group: self.blood_group.clone(),
        }
    }
}

/// Body of `POST /patients` and `PUT /patients/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub age: u32,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub emergency_contact: Option<String>,
    pub blood_group: Option<String>,
}

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
