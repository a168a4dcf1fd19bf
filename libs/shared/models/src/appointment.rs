use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::doctor::Doctor;
use crate::ids::RecordId;
use crate::patient::Patient;
use crate::resource::ResourceRecord;

/// Bookable slots offered by the appointment form.
pub const TIME_SLOTS: [&str; 15] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "12:00", "12:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00",
];

/// Appointment status as stored by the backend. Unknown strings are kept
/// verbatim so they render instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Other(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Other(raw) => raw,
        }
    }

    /// Statuses reachable from this one. Completed and Cancelled are terminal.
    pub fn available_transitions(&self) -> &'static [AppointmentStatus] {
        static FROM_SCHEDULED: [AppointmentStatus; 2] =
            [AppointmentStatus::Completed, AppointmentStatus::Cancelled];
        match self {
            AppointmentStatus::Scheduled => &FROM_SCHEDULED,
            _ => &[],
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "badge badge-blue",
            AppointmentStatus::Completed => "badge badge-green",
            AppointmentStatus::Cancelled => "badge badge-red",
            AppointmentStatus::Other(_) => "badge badge-gray",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppointmentStatus::Completed => "\u{2714}",
            AppointmentStatus::Cancelled => "\u{2716}",
            _ => "\u{1F4C5}",
        }
    }

    /// Verb on the row button that moves an appointment into this status.
    pub fn action_label(&self) -> &str {
        match self {
            AppointmentStatus::Completed => "Complete",
            AppointmentStatus::Cancelled => "Cancel",
            other => other.as_str(),
        }
    }
}

impl From<String> for AppointmentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Scheduled" => AppointmentStatus::Scheduled,
            "Completed" => AppointmentStatus::Completed,
            "Cancelled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Other(raw),
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(raw: &str) -> Self {
        AppointmentStatus::from(raw.to_string())
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    pub appointment_id: String,
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub reason: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub doctor: Option<Doctor>,
}

impl Appointment {
    pub fn patient_name(&self) -> String {
        self.patient
            .as_ref()
            .map(Patient::full_name)
            .unwrap_or_else(|| "Unknown Patient".to_string())
    }

    pub fn doctor_name(&self) -> String {
        self.doctor
            .as_ref()
            .map(Doctor::display_name)
            .unwrap_or_else(|| "Unknown Doctor".to_string())
    }
}

impl ResourceRecord for Appointment {
    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = Vec::with_capacity(5);
        if let Some(patient) = &self.patient {
            fields.push(Cow::Borrowed(patient.first_name.as_str()));
            fields.push(Cow::Borrowed(patient.last_name.as_str()));
        }
        if let Some(doctor) = &self.doctor {
            fields.push(Cow::Borrowed(doctor.first_name.as_str()));
            fields.push(Cow::Borrowed(doctor.last_name.as_str()));
        }
        fields.push(Cow::Borrowed(self.appointment_id.as_str()));
        fields
    }
}

/// Body of `POST /appointments`. Appointments are never edited, only moved
/// between statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub patient_id: Option<RecordId>,
    pub doctor_id: Option<RecordId>,
    pub appointment_date: String,
    pub appointment_time: String,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_strings() {
        let status: AppointmentStatus = serde_json::from_value(serde_json::json!("Completed")).unwrap();
        assert_eq!(status, AppointmentStatus::Completed);
        assert_eq!(serde_json::to_value(&status).unwrap(), serde_json::json!("Completed"));

        let odd: AppointmentStatus = serde_json::from_value(serde_json::json!("No-Show")).unwrap();
        assert_eq!(odd, AppointmentStatus::Other("No-Show".into()));
        assert_eq!(odd.to_string(), "No-Show");
    }

    #[test]
    fn test_only_scheduled_has_transitions() {
        assert_eq!(
            AppointmentStatus::Scheduled.available_transitions(),
            &[AppointmentStatus::Completed, AppointmentStatus::Cancelled]
        );
        assert!(AppointmentStatus::Completed.available_transitions().is_empty());
        assert!(AppointmentStatus::Cancelled.available_transitions().is_empty());
        assert!(AppointmentStatus::Other("x".into()).available_transitions().is_empty());
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(AppointmentStatus::Scheduled.badge_class(), "badge badge-blue");
        assert_eq!(AppointmentStatus::Completed.badge_class(), "badge badge-green");
        assert_eq!(AppointmentStatus::Cancelled.badge_class(), "badge badge-red");
        assert_eq!(AppointmentStatus::Other("?".into()).badge_class(), "badge badge-gray");
    }
}
