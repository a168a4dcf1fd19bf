use axum::response::Html;

use resource_view::{FormModal, ListController};
use shared_models::dates::display_date;
use shared_models::{Doctor, MedicalRecord, MedicalRecordDraft, Patient, RecordId};
use shared_utils::html::{empty_state, escape, modal, select, textarea, Field};
use shared_utils::{page, NavItem};

use crate::services::MedicalRecordService;

/// Patient and doctor lists used to name the people on a record.
pub struct Directory<'a> {
    pub patients: &'a [Patient],
    pub doctors: &'a [Doctor],
}

impl Directory<'_> {
    pub fn patient_name(&self, id: RecordId) -> String {
        self.patients
            .iter()
            .find(|p| p.id == id)
            .map(Patient::full_name)
            .unwrap_or_else(|| "Unknown Patient".to_string())
    }

    pub fn doctor_name(&self, id: RecordId) -> String {
        self.doctors
            .iter()
            .find(|d| d.id == id)
            .map(Doctor::display_name)
            .unwrap_or_else(|| "Unknown Doctor".to_string())
    }

    fn patient_options(&self) -> Vec<(String, String)> {
        self.patients
            .iter()
            .map(|p| (p.id.to_string(), format!("{} ({})", p.full_name(), p.uhid)))
            .collect()
    }

    fn doctor_options(&self) -> Vec<(String, String)> {
        self.doctors
            .iter()
            .map(|d| (d.id.to_string(), format!("{} - {}", d.display_name(), d.specialization)))
            .collect()
    }
}

fn selection(id: Option<RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn list_href(patient: Option<RecordId>) -> String {
    match patient {
        Some(id) => format!("/medical-records?patient_id={}", id),
        None => "/medical-records".to_string(),
    }
}

pub fn records_page(
    operator_label: &str,
    controller: &ListController<MedicalRecordService>,
    directory: &Directory<'_>,
) -> Html<String> {
    let selected = *controller.scope();

    let mut body = String::from(
        "<div class=\"screen-header\"><h1>Medical Records</h1>\
<p>Manage patient medical history and records</p>",
    );
    match selected {
        Some(id) => body.push_str(&format!(
            "<a class=\"button\" href=\"/medical-records?patient_id={}&amp;form=new\">Add Record</a></div>",
            id
        )),
        None => body.push_str("<span class=\"button disabled\">Add Record</span></div>"),
    }

    body.push_str(&format!(
        "<form class=\"patient-picker\" method=\"get\" action=\"/medical-records\">{}<button type=\"submit\">View</button></form>",
        select(
            "patient_id",
            "Select Patient to View Medical Records",
            "Select a patient",
            &directory.patient_options(),
            &selection(selected),
            false,
        )
    ));

    if let Some(form) = controller.form() {
        body.push_str(&record_modal(form, directory, selected));
    }

    match selected {
        None => body.push_str(&empty_state("Please select a patient to view medical records.")),
        Some(patient_id) => {
            body.push_str(&format!(
                "<form class=\"search\" method=\"get\" action=\"/medical-records\">\
<input type=\"hidden\" name=\"patient_id\" value=\"{}\">\
<input type=\"search\" name=\"search\" value=\"{}\" placeholder=\"Search by record ID or diagnosis...\">\
<button type=\"submit\">Search</button></form>",
                patient_id,
                escape(controller.filter())
            ));

            let rows = controller.filtered();
            if rows.is_empty() {
                body.push_str(&empty_state("No medical records found for this patient."));
            } else {
                body.push_str("<div class=\"records\">");
                for record in rows {
                    body.push_str(&record_card(record, directory, true));
                }
                body.push_str("</div>");
            }
        }
    }

    page("Medical Records", NavItem::MedicalRecords, operator_label, &body)
}

fn section(title: &str, value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => format!("<h4>{}</h4><p>{}</p>", title, escape(text)),
        _ => String::new(),
    }
}

fn record_card(record: &MedicalRecord, directory: &Directory<'_>, link: bool) -> String {
    let next_visit = record
        .next_visit
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!(" &middot; Next: {}", escape(&display_date(d))))
        .unwrap_or_default();
    let view_link = if link {
        format!("<a href=\"/medical-records/{}\">View</a>", record.id)
    } else {
        String::new()
    };

    format!(
        "<div class=\"card record\"><h3>Record ID: {code}</h3>\
<p><small>Visit: {visit}{next}</small></p>\
<p><strong>Patient:</strong> {patient}</p><p><strong>Doctor:</strong> {doctor}</p>\
<h4>Diagnosis</h4><p>{diagnosis}</p>{symptoms}{prescription}{tests}{advice}{view}</div>",
        code = escape(&record.record_id),
        visit = escape(&display_date(&record.visit_date)),
        next = next_visit,
        patient = escape(&directory.patient_name(record.patient_id)),
        doctor = escape(&directory.doctor_name(record.doctor_id)),
        diagnosis = escape(&record.diagnosis),
        symptoms = section("Symptoms", record.symptoms.as_deref()),
        prescription = section("Prescription", record.prescription.as_deref()),
        tests = section("Tests Recommended", record.tests_recommended.as_deref()),
        advice = section("Medical Advice", record.advice.as_deref()),
        view = view_link,
    )
}

fn record_modal(
    form: &FormModal<MedicalRecordDraft>,
    directory: &Directory<'_>,
    selected: Option<RecordId>,
) -> String {
    let draft = form.draft();

    let mut fields = String::new();
    fields.push_str(&select("patient_id", "Patient", "Select Patient", &directory.patient_options(), &selection(draft.patient_id), true));
    fields.push_str(&select("doctor_id", "Doctor", "Select Doctor", &directory.doctor_options(), &selection(draft.doctor_id), true));
    fields.push_str(&Field::text("visit_date", "Visit Date", &draft.visit_date).kind("date").required().render());
    fields.push_str(&Field::text("next_visit", "Next Visit", draft.next_visit.as_deref().unwrap_or_default()).kind("date").render());
    fields.push_str(&Field::text("diagnosis", "Diagnosis", &draft.diagnosis).required().render());
    fields.push_str(&textarea("symptoms", "Symptoms", draft.symptoms.as_deref().unwrap_or_default()));
    fields.push_str(&textarea("prescription", "Prescription", draft.prescription.as_deref().unwrap_or_default()));
    fields.push_str(&textarea("tests_recommended", "Tests Recommended", draft.tests_recommended.as_deref().unwrap_or_default()));
    fields.push_str(&textarea("advice", "Medical Advice", draft.advice.as_deref().unwrap_or_default()));

    modal("Add Medical Record", "/medical-records", &fields, "Add Record", &list_href(selected))
}

pub fn record_detail_page(operator_label: &str, record: &MedicalRecord, directory: &Directory<'_>) -> Html<String> {
    let body = format!(
        "<div class=\"screen-header\"><h1>Medical Record</h1>\
<a class=\"button secondary\" href=\"{}\">Back to records</a></div>{}",
        list_href(Some(record.patient_id)),
        record_card(record, directory, false)
    );
    page("Medical Records", NavItem::MedicalRecords, operator_label, &body)
}
