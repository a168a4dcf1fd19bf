pub mod appointment;
pub mod dashboard;
pub mod dates;
pub mod doctor;
pub mod error;
pub mod ids;
pub mod medical_record;
pub mod patient;
pub mod resource;

pub use appointment::{Appointment, AppointmentDraft, AppointmentStatus, TIME_SLOTS};
pub use dashboard::DashboardStats;
pub use doctor::{Doctor, DoctorDraft};
pub use error::{ApiError, AppError};
pub use ids::RecordId;
pub use medical_record::{MedicalRecord, MedicalRecordDraft};
pub use patient::{Patient, PatientDraft};
pub use resource::{EditableRecord, ResourceKind, ResourceRecord};
