use axum::response::Html;

use resource_view::{FormMode, FormModal, ListController};
use shared_models::{Doctor, DoctorDraft};
use shared_utils::html::{empty_state, escape, modal, search_box, Field};
use shared_utils::{page, NavItem};

use crate::services::DoctorService;

fn active_badge(doctor: &Doctor) -> &'static str {
    if doctor.is_active {
        "<span class=\"badge badge-green\">Active</span>"
    } else {
        "<span class=\"badge badge-gray\">Inactive</span>"
    }
}

fn edit_link(doctor: &Doctor, term: &str) -> String {
    let search = if term.is_empty() {
        String::new()
    } else {
        format!("&amp;search={}", urlencoding::encode(term))
    };
    format!("<a href=\"/doctors?edit={}{}\">Edit</a>", doctor.id, search)
}

pub fn doctors_page(operator_label: &str, controller: &ListController<DoctorService>) -> Html<String> {
    let term = controller.filter();
    let rows = controller.filtered();

    let mut body = String::from(
        "<div class=\"screen-header\"><h1>Doctor Management</h1>\
<p>Manage doctor profiles and schedules</p>\
<a class=\"button\" href=\"/doctors?form=new\">Add Doctor</a></div>",
    );
    body.push_str(&search_box("/doctors", term, "Search doctors by name, specialization, or department..."));

    if let Some(form) = controller.form() {
        body.push_str(&doctor_modal(form));
    }

    if rows.is_empty() {
        body.push_str(&empty_state("No doctors found"));
    } else {
        body.push_str(&doctor_table(&rows, term));
        body.push_str(&doctor_cards(&rows, term));
    }

    page("Doctors", NavItem::Doctors, operator_label, &body)
}

fn doctor_table(rows: &[&Doctor], term: &str) -> String {
    let mut html = String::from(
        "<table class=\"desktop-only\"><thead><tr><th>Doctor</th><th>Specialization</th>\
<th>Contact</th><th>Availability</th><th>Fee</th><th>Status</th><th>Actions</th></tr></thead><tbody>",
    );
    for doctor in rows {
        html.push_str(&format!(
            "<tr><td><strong>{name}</strong><br><small>ID: {code}</small></td>\
<td>{spec}<br><small>{dept}</small></td>\
<td>{phone}<br><small>{email}</small></td>\
<td>{hours}</td><td>&#8377;{fee}</td><td>{badge}</td><td>{actions}</td></tr>",
            name = escape(&doctor.display_name()),
            code = escape(&doctor.doctor_id),
            spec = escape(&doctor.specialization),
            dept = escape(&doctor.department),
            phone = escape(&doctor.phone),
            email = escape(&doctor.email),
            hours = escape(&doctor.availability()),
            fee = doctor.consultation_fee,
            badge = active_badge(doctor),
            actions = edit_link(doctor, term),
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn doctor_cards(rows: &[&Doctor], term: &str) -> String {
    let mut html = String::from("<div class=\"cards mobile-only\">");
    for doctor in rows {
        html.push_str(&format!(
            "<div class=\"card\"><h3>{name}</h3>{badge}<p>{spec} &middot; {dept}</p>\
<p>{qualification}, {experience} yrs</p><p>{hours}</p><p>&#8377;{fee}</p>{actions}</div>",
            name = escape(&doctor.display_name()),
            badge = active_badge(doctor),
            spec = escape(&doctor.specialization),
            dept = escape(&doctor.department),
            qualification = escape(&doctor.qualification),
            experience = doctor.experience,
            hours = escape(&doctor.availability()),
            fee = doctor.consultation_fee,
            actions = edit_link(doctor, term),
        ));
    }
    html.push_str("</div>");
    html
}

fn doctor_modal(form: &FormModal<DoctorDraft>) -> String {
    let draft = form.draft();
    let experience = draft.experience.to_string();
    let fee = draft.consultation_fee.to_string();

    let mut fields = String::new();
    fields.push_str(&Field::text("first_name", "First Name", &draft.first_name).required().render());
    fields.push_str(&Field::text("last_name", "Last Name", &draft.last_name).required().render());
    fields.push_str(&Field::text("specialization", "Specialization", &draft.specialization).required().render());
    fields.push_str(&Field::text("qualification", "Qualification", &draft.qualification).required().render());
    fields.push_str(&Field::text("experience", "Experience (years)", &experience).kind("number").required().render_with("min=\"0\""));
    fields.push_str(&Field::text("phone", "Phone", &draft.phone).kind("tel").required().render());
    fields.push_str(&Field::text("email", "Email", &draft.email).kind("email").required().render());
    fields.push_str(&Field::text("department", "Department", &draft.department).required().render());
    fields.push_str(&Field::text("consultation_fee", "Consultation Fee", &fee).kind("number").required().render_with("min=\"0\" step=\"0.01\""));
    fields.push_str(&Field::text("available_from", "Available From", &draft.available_from).kind("time").render());
    fields.push_str(&Field::text("available_to", "Available To", &draft.available_to).kind("time").render());

    match form.mode() {
        FormMode::Create => modal("Add New Doctor", "/doctors", &fields, "Add Doctor", "/doctors"),
        FormMode::Edit(id) => {
            fields.push_str("<input type=\"hidden\" name=\"editing\" value=\"1\">");
            fields.push_str(&format!(
                "<label class=\"field\"><input type=\"checkbox\" name=\"is_active\"{}> Active</label>",
                if draft.is_active.unwrap_or(true) { " checked" } else { "" }
            ));
            modal("Edit Doctor", &format!("/doctors/{}", id), &fields, "Update Doctor", "/doctors")
        }
    }
}
