//! HTML page generator implementation.

use std::fmt::Display;

use greeter::{DefaultValue, Field, FieldKind, Form, FormDefinition, escape_html};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document. Falls back to the form's own title.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "greeter".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// What to show in the output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A successful result. Inserted as-is: it must already be safe markup,
    /// as the greeting function's output is.
    Value(String),
    /// A failure message. Escaped before insertion.
    Error(String),
}

impl Outcome {
    /// Build an outcome from a handler result.
    pub fn from_result<E: Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    /// Check if this outcome is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Generate an HTML page from a form type.
///
/// This is a convenience function that uses default options with the given title.
pub fn to_html<F: Form>(title: Option<&str>) -> String {
    let mut options = HtmlOptions::new();
    if let Some(t) = title {
        options.title = Some(t.to_string());
    }
    to_html_with_options::<F>(options)
}

/// Generate an HTML page with custom options and an empty output area.
pub fn to_html_with_options<F: Form>(options: HtmlOptions) -> String {
    generate_html(&F::form(), &options, None)
}

/// Generate an HTML page whose output area shows `outcome`.
pub fn to_html_with_outcome<F: Form>(options: HtmlOptions, outcome: &Outcome) -> String {
    generate_html(&F::form(), &options, Some(outcome))
}

fn generate_html(
    definition: &FormDefinition,
    options: &HtmlOptions,
    outcome: Option<&Outcome>,
) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;
    let title = options.title.as_ref().or(definition.title.as_ref());

    tracing::debug!(
        fields = definition.len(),
        full_document = options.full_document,
        "rendering html form"
    );

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<form class=\"{prefix}-form\">\n"));

    if let Some(title) = title {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    if let Some(description) = &definition.description {
        html.push_str(&format!(
            "  <p class=\"{prefix}-description\">{}</p>\n",
            escape_html(description)
        ));
    }

    html.push_str(&format!("  <div class=\"{prefix}-inputs\">\n"));
    for field in definition.fields() {
        html.push_str(&generate_field(field, prefix, 2));
    }
    html.push_str("  </div>\n");

    html.push_str(&format!(
        "  <button type=\"submit\" class=\"{prefix}-submit\">Submit</button>\n"
    ));

    html.push_str(&generate_output(&definition.output_label, prefix, outcome));

    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single field.
fn generate_field(field: &Field, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let path = escape_html(field.path().as_str());
    let field_id = escape_html(&field.path().to_element_id());
    let value = field.initial_value();

    // Assumed fields are not shown but still submitted
    if let DefaultValue::Assumed(assumed) = field.default() {
        let assumed = match assumed.as_str() {
            Some(s) => escape_html(s),
            None => assumed.as_int().map(|i| i.to_string()).unwrap_or_default(),
        };
        return format!("{ind}<input type=\"hidden\" name=\"{path}\" value=\"{assumed}\">\n");
    }

    let mut html = String::new();
    html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
    html.push_str(&format!(
        "{ind}  <label for=\"{field_id}\">{}</label>\n",
        escape_html(field.label())
    ));

    match field.kind() {
        FieldKind::Text(text) => {
            let content = value.as_str().map(escape_html).unwrap_or_default();
            let placeholder = text
                .placeholder
                .as_deref()
                .map(|p| format!(" placeholder=\"{}\"", escape_html(p)))
                .unwrap_or_default();

            if text.is_multiline() {
                html.push_str(&format!(
                    "{ind}  <textarea id=\"{field_id}\" name=\"{path}\" rows=\"{}\" class=\"{prefix}-textarea\"{placeholder}>{content}</textarea>\n",
                    text.lines
                ));
            } else {
                html.push_str(&format!(
                    "{ind}  <input type=\"text\" id=\"{field_id}\" name=\"{path}\" class=\"{prefix}-input\"{placeholder} value=\"{content}\">\n"
                ));
            }
        }

        FieldKind::Slider(slider) => {
            let current = value
                .as_int()
                .map(|i| slider.clamp(i))
                .unwrap_or(slider.default);

            html.push_str(&format!(
                "{ind}  <input type=\"range\" id=\"{field_id}\" name=\"{path}\" class=\"{prefix}-slider\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{current}\" oninput=\"this.nextElementSibling.value = this.value\">\n",
                slider.min, slider.max, slider.step
            ));
            html.push_str(&format!(
                "{ind}  <output for=\"{field_id}\" class=\"{prefix}-slider-value\">{current}</output>\n"
            ));
        }
    }

    html.push_str(&format!("{ind}</div>\n"));
    html
}

/// Generate the output area, filled in if there is an outcome.
fn generate_output(label: &str, prefix: &str, outcome: Option<&Outcome>) -> String {
    let (class, content) = match outcome {
        None => (format!("{prefix}-result"), String::new()),
        Some(Outcome::Value(value)) => (format!("{prefix}-result"), value.clone()),
        Some(Outcome::Error(message)) => (
            format!("{prefix}-result {prefix}-error"),
            escape_html(message),
        ),
    };

    let mut html = String::new();
    html.push_str(&format!("  <div class=\"{prefix}-output\">\n"));
    html.push_str(&format!(
        "    <label for=\"{prefix}-output\">{}</label>\n",
        escape_html(label)
    ));
    html.push_str(&format!(
        "    <output id=\"{prefix}-output\" class=\"{class}\">{content}</output>\n"
    ));
    html.push_str("  </div>\n");
    html
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-description {{
      margin: 1rem 0;
      color: #555;
    }}
    .{prefix}-field {{
      margin: 0.5rem 0;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-input, .{prefix}-textarea {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-slider {{
      width: 85%;
      vertical-align: middle;
    }}
    .{prefix}-slider-value {{
      margin-left: 0.5rem;
    }}
    .{prefix}-submit {{
      margin-top: 1rem;
      padding: 0.5rem 1rem;
    }}
    .{prefix}-output {{
      margin-top: 1.5rem;
    }}
    .{prefix}-result {{
      display: block;
      min-height: 2rem;
      padding: 0.5rem;
      background: #f5f5f5;
      white-space: pre-wrap;
    }}
    .{prefix}-error {{
      color: #b00020;
      background: #fdecea;
    }}
  </style>
"#
    )
}
