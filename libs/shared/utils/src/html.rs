//! Small helpers for building console markup by hand.

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub fn opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape(v),
        _ => "-".to_string(),
    }
}

pub struct Field<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub value: &'a str,
    pub input_type: &'a str,
    pub required: bool,
}

impl<'a> Field<'a> {
    pub fn text(name: &'a str, label: &'a str, value: &'a str) -> Self {
        Self { name, label, value, input_type: "text", required: false }
    }

    pub fn kind(mut self, input_type: &'a str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn render(&self) -> String {
        self.render_with("")
    }

    /// Renders with extra raw attributes such as `min="2024-01-01"`.
    pub fn render_with(&self, extra_attrs: &str) -> String {
        format!(
            "<label class=\"field\"><span>{label}{star}</span><input type=\"{kind}\" name=\"{name}\" value=\"{value}\"{req}{extra}></label>",
            label = escape(self.label),
            star = if self.required { " *" } else { "" },
            kind = self.input_type,
            name = self.name,
            value = escape(self.value),
            req = if self.required { " required" } else { "" },
            extra = if extra_attrs.is_empty() { String::new() } else { format!(" {}", extra_attrs) },
        )
    }
}

pub fn textarea(name: &str, label: &str, value: &str) -> String {
    format!(
        "<label class=\"field wide\"><span>{}</span><textarea name=\"{}\" rows=\"3\">{}</textarea></label>",
        escape(label),
        name,
        escape(value)
    )
}

/// A `<select>`; the placeholder option carries an empty value so a required
/// select cannot be submitted without a choice.
pub fn select(
    name: &str,
    label: &str,
    placeholder: &str,
    options: &[(String, String)],
    selected: &str,
    required: bool,
) -> String {
    let mut html = format!(
        "<label class=\"field\"><span>{}{}</span><select name=\"{}\"{}><option value=\"\">{}</option>",
        escape(label),
        if required { " *" } else { "" },
        name,
        if required { " required" } else { "" },
        escape(placeholder)
    );
    for (value, text) in options {
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape(value),
            if value == selected { " selected" } else { "" },
            escape(text)
        ));
    }
    html.push_str("</select></label>");
    html
}

pub fn search_box(action: &str, term: &str, placeholder: &str) -> String {
    format!(
        "<form class=\"search\" method=\"get\" action=\"{}\"><input type=\"search\" name=\"search\" value=\"{}\" placeholder=\"{}\"><button type=\"submit\">Search</button></form>",
        action,
        escape(term),
        escape(placeholder)
    )
}

/// Overlay wrapping a form. `cancel_href` closes the modal without saving.
pub fn modal(title: &str, action: &str, fields: &str, submit_label: &str, cancel_href: &str) -> String {
    format!(
        "<div class=\"modal\"><div class=\"modal-body\"><h2>{}</h2><form method=\"post\" action=\"{}\">{}<div class=\"actions\"><a class=\"button secondary\" href=\"{}\">Cancel</a><button type=\"submit\">{}</button></div></form></div></div>",
        escape(title),
        action,
        fields,
        cancel_href,
        escape(submit_label)
    )
}

pub fn empty_state(message: &str) -> String {
    format!("<p class=\"empty\">{}</p>", escape(message))
}
