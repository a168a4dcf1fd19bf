use axum::response::Html;

use resource_view::{FormMode, FormModal, ListController};
use shared_models::patient::{BLOOD_GROUPS, GENDERS};
use shared_models::{Patient, PatientDraft};
use shared_utils::html::{empty_state, escape, modal, opt, search_box, select, textarea, Field};
use shared_utils::{page, NavItem};

use crate::services::PatientService;

fn search_suffix(term: &str) -> String {
    if term.is_empty() {
        String::new()
    } else {
        format!("&amp;search={}", urlencoding::encode(term))
    }
}

pub fn patients_page(operator_label: &str, controller: &ListController<PatientService>) -> Html<String> {
    let term = controller.filter();
    let rows = controller.filtered();

    let mut body = String::from(
        "<div class=\"screen-header\"><h1>Patient Management</h1>\
<p>Manage patient registrations and information</p>\
<a class=\"button\" href=\"/patients?form=new\">Add Patient</a></div>",
    );
    body.push_str(&search_box("/patients", term, "Search patients by name, UHID, or phone..."));

    if let Some(form) = controller.form() {
        body.push_str(&patient_modal(form));
    }

    if rows.is_empty() {
        body.push_str(&empty_state("No patients found"));
    } else {
        body.push_str(&patient_table(&rows, term));
        body.push_str(&patient_cards(&rows, term));
    }

    page("Patients", NavItem::Patients, operator_label, &body)
}

fn patient_table(rows: &[&Patient], term: &str) -> String {
    let mut html = String::from(
        "<table class=\"desktop-only\"><thead><tr><th>Patient</th><th>Contact</th>\
<th>Details</th><th>Location</th><th>Actions</th></tr></thead><tbody>",
    );
    for patient in rows {
        html.push_str(&format!(
            "<tr><td><strong>{name}</strong><br><small>UHID: {uhid}</small></td>\
<td>{phone}<br><small>{email}</small></td>\
<td>{gender}, {age} yrs<br><small>Blood: {blood}</small></td>\
<td>{location}</td><td>{actions}</td></tr>",
            name = escape(&patient.full_name()),
            uhid = escape(&patient.uhid),
            phone = escape(&patient.phone),
            email = opt(patient.email.as_deref()),
            gender = escape(&patient.gender),
            age = patient.age,
            blood = opt(patient.blood_group.as_deref()),
            location = opt(patient.location().as_deref()),
            actions = row_actions(patient, term),
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn patient_cards(rows: &[&Patient], term: &str) -> String {
    let mut html = String::from("<div class=\"cards mobile-only\">");
    for patient in rows {
        html.push_str(&format!(
            "<div class=\"card\"><h3>{name}</h3><p><small>UHID: {uhid}</small></p>\
<p>{phone}</p><p>{gender}, {age} yrs &middot; {blood}</p><p>{location}</p>{actions}</div>",
            name = escape(&patient.full_name()),
            uhid = escape(&patient.uhid),
            phone = escape(&patient.phone),
            gender = escape(&patient.gender),
            age = patient.age,
            blood = opt(patient.blood_group.as_deref()),
            location = opt(patient.location().as_deref()),
            actions = row_actions(patient, term),
        ));
    }
    html.push_str("</div>");
    html
}

fn row_actions(patient: &Patient, term: &str) -> String {
    format!(
        "<a href=\"/patients?edit={id}{search}\">Edit</a> <a class=\"danger\" href=\"/patients/{id}/delete\">Delete</a>",
        id = patient.id,
        search = search_suffix(term),
    )
}

fn patient_modal(form: &FormModal<PatientDraft>) -> String {
    let draft = form.draft();
    let age = draft.age.to_string();
    let genders: Vec<(String, String)> = GENDERS.iter().map(|g| (g.to_string(), g.to_string())).collect();
    let blood_groups: Vec<(String, String)> =
        BLOOD_GROUPS.iter().map(|g| (g.to_string(), g.to_string())).collect();

    let mut fields = String::new();
    fields.push_str(&Field::text("first_name", "First Name", &draft.first_name).required().render());
    fields.push_str(&Field::text("last_name", "Last Name", &draft.last_name).required().render());
    fields.push_str(&select("gender", "Gender", "Select Gender", &genders, &draft.gender, true));
    fields.push_str(&Field::text("date_of_birth", "Date of Birth", &draft.date_of_birth).kind("date").required().render());
    fields.push_str(&Field::text("age", "Age", &age).kind("number").required().render_with("min=\"0\""));
    fields.push_str(&Field::text("phone", "Phone Number", &draft.phone).kind("tel").required().render());
    fields.push_str(&Field::text("email", "Email", draft.email.as_deref().unwrap_or_default()).kind("email").render());
    fields.push_str(&Field::text("emergency_contact", "Emergency Contact", draft.emergency_contact.as_deref().unwrap_or_default()).kind("tel").render());
    fields.push_str(&textarea("address", "Address", draft.address.as_deref().unwrap_or_default()));
    fields.push_str(&Field::text("city", "City", draft.city.as_deref().unwrap_or_default()).render());
    fields.push_str(&Field::text("state", "State", draft.state.as_deref().unwrap_or_default()).render());
    fields.push_str(&Field::text("pincode", "Pincode", draft.pincode.as_deref().unwrap_or_default()).render());
    fields.push_str(&select(
        "blood_group",
        "Blood Group",
        "Select Blood Group",
        &blood_groups,
        draft.blood_group.as_deref().unwrap_or_default(),
        false,
    ));

    match form.mode() {
        FormMode::Create => modal("Add New Patient", "/patients", &fields, "Add Patient", "/patients"),
        FormMode::Edit(id) => modal(
            "Edit Patient",
            &format!("/patients/{}", id),
            &fields,
            "Update Patient",
            "/patients",
        ),
    }
}

pub fn delete_confirm_page(operator_label: &str, patient: &Patient) -> Html<String> {
    let body = format!(
        "<div class=\"modal\"><div class=\"modal-body\"><h2>Delete patient</h2>\
<p>Are you sure you want to delete this patient?</p><p><strong>{name}</strong> ({uhid})</p>\
<form method=\"post\" action=\"/patients/{id}/delete\">\
<button type=\"submit\" name=\"confirm\" value=\"yes\">Delete</button> \
<button type=\"submit\" name=\"confirm\" value=\"no\" class=\"secondary\">Cancel</button></form></div></div>",
        name = escape(&patient.full_name()),
        uhid = escape(&patient.uhid),
        id = patient.id,
    );
    page("Patients", NavItem::Patients, operator_label, &body)
}
