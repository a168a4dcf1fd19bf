use serde::Deserialize;

use shared_models::{AppointmentDraft, AppointmentStatus, RecordId};
use shared_utils::form::non_empty;

#[derive(Debug, Default, Deserialize)]
pub struct AppointmentListQuery {
    #[serde(default)]
    pub search: String,
    pub form: Option<String>,
}

impl AppointmentListQuery {
    pub fn wants_new_form(&self) -> bool {
        self.form.as_deref() == Some("new")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppointmentForm {
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub reason: String,
    pub notes: String,
}

impl AppointmentForm {
    /// An unselected dropdown submits `""`, which stays `None`.
    pub fn into_draft(self) -> AppointmentDraft {
        AppointmentDraft {
            patient_id: RecordId::parse_selection(&self.patient_id),
            doctor_id: RecordId::parse_selection(&self.doctor_id),
            appointment_date: self.appointment_date,
            appointment_time: self.appointment_time,
            reason: non_empty(self.reason),
            notes: non_empty(self.notes),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

impl StatusForm {
    pub fn target(&self) -> AppointmentStatus {
        AppointmentStatus::from(self.status.trim())
    }
}

/// Scheduled / Completed / Cancelled totals shown under the list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn tally<'a>(statuses: impl IntoIterator<Item = &'a AppointmentStatus>) -> Self {
        statuses.into_iter().fold(Self::default(), |mut counts, status| {
            match status {
                AppointmentStatus::Scheduled => counts.scheduled += 1,
                AppointmentStatus::Completed => counts.completed += 1,
                AppointmentStatus::Cancelled => counts.cancelled += 1,
                AppointmentStatus::Other(_) => {}
            }
            counts
        })
    }
}
