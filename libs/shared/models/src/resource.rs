use std::borrow::Cow;
use std::fmt;

use crate::ids::RecordId;

/// The backend collections the console manages. Used as the key for shared
/// reference data and in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Patients,
    Doctors,
    Appointments,
    MedicalRecords,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Patients => "patients",
            ResourceKind::Doctors => "doctors",
            ResourceKind::Appointments => "appointments",
            ResourceKind::MedicalRecords => "medical records",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record fetched from the backend and shown in a list screen.
pub trait ResourceRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> RecordId;

    /// Values the search box matches against.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// A record whose form can be re-opened for editing.
pub trait EditableRecord: ResourceRecord {
    type Draft;

    fn to_draft(&self) -> Self::Draft;
}
