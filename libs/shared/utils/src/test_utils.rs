use serde_json::{json, Value};

use shared_config::AdminConfig;

/// Console config pointing at a mock backend.
pub struct TestConfig {
    pub api_base_url: String,
    pub operator_label: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            operator_label: "Admin User".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    pub fn to_admin_config(&self) -> AdminConfig {
        let mut config = AdminConfig::for_base_url(self.api_base_url.clone());
        config.operator_label = self.operator_label.clone();
        config
    }
}

/// Backend payloads shaped like the real hospital API.
pub struct MockBackendResponses;

impl MockBackendResponses {
    pub fn patient(id: i64, uhid: &str, first_name: &str, last_name: &str, phone: &str) -> Value {
        json!({
            "id": id,
            "uhid": uhid,
            "first_name": first_name,
            "last_name": last_name,
            "gender": "Female",
            "date_of_birth": "1990-06-15T00:00:00",
            "age": 34,
            "phone": phone,
            "email": null,
            "address": "12 MG Road",
            "city": "Mumbai",
            "state": "Maharashtra",
            "pincode": "400001",
            "emergency_contact": null,
            "blood_group": "O+",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": null
        })
    }

    pub fn patients() -> Value {
        json!([
            Self::patient(1, "UH1", "Amit", "Sharma", "9876500001"),
            Self::patient(2, "UH2", "Neha", "Patel", "9876500002"),
        ])
    }

    pub fn doctor(id: i64, first_name: &str, last_name: &str, specialization: &str, department: &str) -> Value {
        json!({
            "id": id,
            "doctor_id": format!("DOC{}", 1000 + id),
            "first_name": first_name,
            "last_name": last_name,
            "specialization": specialization,
            "qualification": "MBBS, MD",
            "experience": 12,
            "phone": "9123400000",
            "email": "doctor@hospital.example",
            "department": department,
            "consultation_fee": 500.0,
            "available_from": "09:00",
            "available_to": "17:00",
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn doctors() -> Value {
        json!([
            Self::doctor(1, "Priya", "Singh", "Cardiology", "Cardiology"),
            Self::doctor(2, "Raj", "Kumar", "Orthopedics", "Surgery"),
        ])
    }

    pub fn appointment(id: i64, patient: Value, doctor: Value, date: &str, time: &str, status: &str) -> Value {
        json!({
            "id": id,
            "appointment_id": format!("APT{}", 100000 + id),
            "patient_id": patient["id"],
            "doctor_id": doctor["id"],
            "appointment_date": format!("{}T00:00:00", date),
            "appointment_time": time,
            "status": status,
            "reason": "Routine checkup",
            "notes": null,
            "created_at": "2024-01-01T00:00:00Z",
            "patient": patient,
            "doctor": doctor
        })
    }

    pub fn medical_record(id: i64, patient_id: i64, doctor_id: i64, diagnosis: &str) -> Value {
        json!({
            "id": id,
            "record_id": format!("MR{}", 500000 + id),
            "patient_id": patient_id,
            "doctor_id": doctor_id,
            "diagnosis": diagnosis,
            "symptoms": "Fever",
            "prescription": "Paracetamol 500mg",
            "tests_recommended": null,
            "advice": "Rest",
            "visit_date": "2024-03-01T00:00:00",
            "next_visit": null,
            "created_at": "2024-03-01T10:00:00Z"
        })
    }

    pub fn dashboard_stats() -> Value {
        json!({
            "total_patients": 120,
            "total_doctors": 14,
            "total_appointments": 356,
            "today_appointments": 9
        })
    }

    pub fn error_response(detail: &str) -> Value {
        json!({ "detail": detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::{Appointment, Doctor, Patient};

    #[test]
    fn test_config_creation() {
        let config = TestConfig::with_base_url("http://127.0.0.1:4010").to_admin_config();

        assert_eq!(config.api_base_url, "http://127.0.0.1:4010");
        assert_eq!(config.operator_label, "Admin User");
        assert!(config.is_configured());
    }

    #[test]
    fn test_fixtures_decode_into_models() {
        let patients: Vec<Patient> = serde_json::from_value(MockBackendResponses::patients()).unwrap();
        let doctors: Vec<Doctor> = serde_json::from_value(MockBackendResponses::doctors()).unwrap();
        let appointment: Appointment = serde_json::from_value(MockBackendResponses::appointment(
            1,
            MockBackendResponses::patient(1, "UH1", "Amit", "Sharma", "1"),
            MockBackendResponses::doctor(1, "Priya", "Singh", "Cardiology", "Cardiology"),
            "2024-05-01",
            "09:30",
            "Scheduled",
        ))
        .unwrap();

        assert_eq!(patients.len(), 2);
        assert_eq!(doctors[1].display_name(), "Dr. Raj Kumar");
        assert_eq!(appointment.patient_name(), "Amit Sharma");
    }
}
