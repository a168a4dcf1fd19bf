use axum::response::Html;

use shared_models::{Appointment, DashboardStats};
use shared_utils::html::{empty_state, escape};
use shared_utils::{page, NavItem};

fn header() -> &'static str {
    "<div class=\"screen-header\"><h1>Hospital Dashboard</h1>\
<p>Welcome to Indian Hospital Management System</p></div>"
}

pub fn dashboard_page(operator_label: &str, stats: &DashboardStats, today: &[Appointment]) -> Html<String> {
    let cards = [
        ("Total Patients", stats.total_patients, "badge-blue"),
        ("Total Doctors", stats.total_doctors, "badge-green"),
        ("Total Appointments", stats.total_appointments, "badge-gray"),
        ("Today's Appointments", stats.today_appointments, "badge-red"),
    ];

    let mut body = String::from(header());
    body.push_str("<div class=\"stats\">");
    for (title, value, accent) in cards {
        body.push_str(&format!(
            "<div class=\"stat card\"><span class=\"badge {}\">{}</span><strong>{}</strong></div>",
            accent, title, value
        ));
    }
    body.push_str("</div>");

    body.push_str(
        "<div class=\"card\"><h3>Quick Actions</h3>\
<p><a href=\"/patients?form=new\">Register New Patient</a></p>\
<p><a href=\"/appointments?form=new\">Schedule Appointment</a></p>\
<p><a href=\"/medical-records\">Add Medical Record</a></p></div>",
    );

    body.push_str("<div class=\"card\"><h3>Today's Appointments</h3>");
    if today.is_empty() {
        body.push_str(&empty_state("No appointments today"));
    } else {
        body.push_str("<table><thead><tr><th>Time</th><th>Patient</th><th>Doctor</th><th>Status</th></tr></thead><tbody>");
        for appointment in today {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td><span class=\"{}\">{}</span></td></tr>",
                escape(&appointment.appointment_time),
                escape(&appointment.patient_name()),
                escape(&appointment.doctor_name()),
                appointment.status.badge_class(),
                escape(appointment.status.as_str()),
            ));
        }
        body.push_str("</tbody></table>");
    }
    body.push_str("</div>");

    page("Dashboard", NavItem::Dashboard, operator_label, &body)
}

/// Shown instead of the summary when the counters cannot be fetched.
pub fn dashboard_error_page(operator_label: &str, message: &str) -> Html<String> {
    let body = format!(
        "{}<div class=\"error-banner\"><p>Error loading dashboard: {}</p></div>",
        header(),
        escape(message)
    );
    page("Dashboard", NavItem::Dashboard, operator_label, &body)
}
