use axum::response::Html;

use crate::html::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Patients,
    Doctors,
    Appointments,
    MedicalRecords,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Patients,
        NavItem::Doctors,
        NavItem::Appointments,
        NavItem::MedicalRecords,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::Patients => "/patients",
            NavItem::Doctors => "/doctors",
            NavItem::Appointments => "/appointments",
            NavItem::MedicalRecords => "/medical-records",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Patients => "Patients",
            NavItem::Doctors => "Doctors",
            NavItem::Appointments => "Appointments",
            NavItem::MedicalRecords => "Medical Records",
        }
    }
}

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827;display:flex;min-height:100vh}\
nav.sidebar{width:220px;background:#fff;border-right:1px solid #e5e7eb;padding:1rem}\
nav.sidebar a{display:block;padding:.5rem .75rem;border-radius:.5rem;color:#374151;text-decoration:none}\
nav.sidebar a.active{background:#eff6ff;color:#1d4ed8;font-weight:600}\
.main{flex:1;display:flex;flex-direction:column}\
header.topbar{display:flex;justify-content:space-between;padding:.75rem 1.5rem;background:#fff;border-bottom:1px solid #e5e7eb}\
main{padding:1.5rem}\
table{width:100%;border-collapse:collapse;background:#fff}th,td{text-align:left;padding:.5rem;border-bottom:1px solid #e5e7eb}\
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:1rem}\
.card{background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem}\
.badge{font-size:.75rem;padding:.1rem .5rem;border-radius:999px}\
.badge-blue{background:#dbeafe;color:#1e40af}.badge-green{background:#dcfce7;color:#166534}\
.badge-red{background:#fee2e2;color:#991b1b}.badge-gray{background:#f3f4f6;color:#1f2937}\
.modal{position:fixed;inset:0;background:rgba(0,0,0,.5);display:flex;align-items:center;justify-content:center}\
.modal-body{background:#fff;border-radius:.5rem;padding:1.5rem;max-width:960px;width:100%;max-height:90vh;overflow-y:auto}\
.field{display:inline-flex;flex-direction:column;margin:.25rem .5rem .25rem 0}.field.wide{display:flex}\
.error-banner{background:#fef2f2;border:1px solid #fecaca;color:#991b1b;padding:1rem;border-radius:.5rem}\
.summary,.stats{display:grid;grid-template-columns:repeat(auto-fill,minmax(180px,1fr));gap:1rem;margin:1rem 0}\
.stat{background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem;display:flex;justify-content:space-between}\
form.inline{display:inline}.button.disabled{opacity:.5;cursor:not-allowed}\
.mobile-only{display:none}\
@media (max-width:640px){.desktop-only{display:none}.mobile-only{display:block}nav.sidebar{display:none}}";

/// Wraps screen markup in the console chrome: sidebar navigation with the
/// active screen highlighted and a top bar carrying the operator label.
pub fn page(title: &str, active: NavItem, operator_label: &str, body: &str) -> Html<String> {
    let mut nav = String::new();
    for item in NavItem::ALL {
        nav.push_str(&format!(
            "<a href=\"{}\"{}>{}</a>",
            item.path(),
            if item == active { " class=\"active\"" } else { "" },
            item.label()
        ));
    }

    Html(format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} - Hospital Admin</title><style>{STYLE}</style></head>\
<body><nav class=\"sidebar\"><h2>Hospital Admin</h2>{nav}</nav>\
<div class=\"main\"><header class=\"topbar\"><strong>{title}</strong><span class=\"operator\">{operator}</span></header>\
<main>{body}</main></div></body></html>",
        title = escape(title),
        operator = escape(operator_label),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_is_highlighted() {
        let Html(html) = page("Patients", NavItem::Patients, "Admin User", "<p>x</p>");
        assert!(html.contains("<a href=\"/patients\" class=\"active\">Patients</a>"));
        assert!(html.contains("<a href=\"/doctors\">Doctors</a>"));
        assert!(html.contains("Admin User"));
        assert!(html.contains("<p>x</p>"));
    }
}
