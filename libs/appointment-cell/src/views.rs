use axum::response::Html;

use resource_view::{FormModal, ListController};
use shared_models::dates::{display_date, today_string};
use shared_models::{Appointment, AppointmentDraft, Doctor, Patient, RecordId, TIME_SLOTS};
use shared_utils::html::{empty_state, escape, modal, opt, search_box, select, textarea, Field};
use shared_utils::{page, NavItem};

use crate::models::StatusCounts;
use crate::services::AppointmentService;

/// Dropdown contents for the booking form.
pub struct BookingChoices<'a> {
    pub patients: &'a [Patient],
    pub doctors: &'a [Doctor],
}

pub fn appointments_page(
    operator_label: &str,
    controller: &ListController<AppointmentService>,
    choices: &BookingChoices<'_>,
) -> Html<String> {
    let term = controller.filter();
    let rows = controller.filtered();

    let mut body = String::from(
        "<div class=\"screen-header\"><h1>Appointment Management</h1>\
<p>Schedule and manage patient appointments</p>\
<a class=\"button\" href=\"/appointments?form=new\">Book Appointment</a></div>",
    );
    body.push_str(&search_box(
        "/appointments",
        term,
        "Search appointments by patient, doctor, or appointment ID...",
    ));

    if let Some(form) = controller.form() {
        body.push_str(&booking_modal(form, choices));
    }

    if rows.is_empty() {
        body.push_str(&empty_state("No appointments found"));
    } else {
        body.push_str(&appointment_table(&rows));
        body.push_str(&appointment_cards(&rows));
    }

    let counts = StatusCounts::tally(controller.items().iter().map(|a| &a.status));
    body.push_str(&status_summary(counts));

    page("Appointments", NavItem::Appointments, operator_label, &body)
}

fn status_badge(appointment: &Appointment) -> String {
    format!(
        "<span class=\"{}\">{} {}</span>",
        appointment.status.badge_class(),
        appointment.status.icon(),
        escape(appointment.status.as_str())
    )
}

/// One button per allowed transition; terminal statuses get none.
fn status_actions(appointment: &Appointment) -> String {
    appointment
        .status
        .available_transitions()
        .iter()
        .map(|target| {
            format!(
                "<form class=\"inline\" method=\"post\" action=\"/appointments/{}/status\">\
<input type=\"hidden\" name=\"status\" value=\"{}\"><button type=\"submit\" class=\"small\">{}</button></form>",
                appointment.id,
                escape(target.as_str()),
                escape(target.action_label())
            )
        })
        .collect()
}

fn appointment_table(rows: &[&Appointment]) -> String {
    let mut html = String::from(
        "<table class=\"desktop-only\"><thead><tr><th>Appointment</th><th>Patient</th>\
<th>Doctor</th><th>Date &amp; Time</th><th>Status</th><th>Actions</th></tr></thead><tbody>",
    );
    for appointment in rows {
        html.push_str(&format!(
            "<tr><td><strong>{code}</strong><br><small>{reason}</small></td>\
<td>{patient}</td><td>{doctor}</td><td>{date}<br><small>{time}</small></td>\
<td>{badge}</td><td>{actions}</td></tr>",
            code = escape(&appointment.appointment_id),
            reason = opt(appointment.reason.as_deref()),
            patient = escape(&appointment.patient_name()),
            doctor = escape(&appointment.doctor_name()),
            date = escape(&display_date(&appointment.appointment_date)),
            time = escape(&appointment.appointment_time),
            badge = status_badge(appointment),
            actions = status_actions(appointment),
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn appointment_cards(rows: &[&Appointment]) -> String {
    let mut html = String::from("<div class=\"cards mobile-only\">");
    for appointment in rows {
        html.push_str(&format!(
            "<div class=\"card\"><h3>{patient}</h3>{badge}<p>{doctor}</p>\
<p>{date} &middot; {time}</p><p><small>{code}</small></p>{actions}</div>",
            patient = escape(&appointment.patient_name()),
            badge = status_badge(appointment),
            doctor = escape(&appointment.doctor_name()),
            date = escape(&display_date(&appointment.appointment_date)),
            time = escape(&appointment.appointment_time),
            code = escape(&appointment.appointment_id),
            actions = status_actions(appointment),
        ));
    }
    html.push_str("</div>");
    html
}

fn status_summary(counts: StatusCounts) -> String {
    format!(
        "<div class=\"summary\">\
<div class=\"stat\"><span class=\"badge badge-blue\">Scheduled</span><strong>{}</strong></div>\
<div class=\"stat\"><span class=\"badge badge-green\">Completed</span><strong>{}</strong></div>\
<div class=\"stat\"><span class=\"badge badge-red\">Cancelled</span><strong>{}</strong></div></div>",
        counts.scheduled, counts.completed, counts.cancelled
    )
}

fn selection(id: Option<RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn booking_modal(form: &FormModal<AppointmentDraft>, choices: &BookingChoices<'_>) -> String {
    let draft = form.draft();
    let patients: Vec<(String, String)> = choices
        .patients
        .iter()
        .map(|p| (p.id.to_string(), format!("{} ({})", p.full_name(), p.uhid)))
        .collect();
    let doctors: Vec<(String, String)> = choices
        .doctors
        .iter()
        .map(|d| (d.id.to_string(), format!("{} - {}", d.display_name(), d.specialization)))
        .collect();
    let slots: Vec<(String, String)> = TIME_SLOTS.iter().map(|s| (s.to_string(), s.to_string())).collect();
    let min_date = format!("min=\"{}\"", today_string());

    let mut fields = String::new();
    fields.push_str(&select("patient_id", "Patient", "Select Patient", &patients, &selection(draft.patient_id), true));
    fields.push_str(&select("doctor_id", "Doctor", "Select Doctor", &doctors, &selection(draft.doctor_id), true));
    fields.push_str(
        &Field::text("appointment_date", "Date", &draft.appointment_date)
            .kind("date")
            .required()
            .render_with(&min_date),
    );
    fields.push_str(&select("appointment_time", "Time", "Select Time", &slots, &draft.appointment_time, true));
    fields.push_str(&textarea("reason", "Reason for Visit", draft.reason.as_deref().unwrap_or_default()));
    fields.push_str(&textarea("notes", "Notes", draft.notes.as_deref().unwrap_or_default()));

    modal("Book New Appointment", "/appointments", &fields, "Book Appointment", "/appointments")
}
