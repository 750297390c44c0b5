use crate::{Field, FieldPath};

/// Everything a backend needs to present a form.
///
/// A form definition is presentation-agnostic: it can be shown as a sequence
/// of CLI prompts, rendered as an HTML page, or answered by a test harness.
#[derive(Debug, Clone, Default)]
pub struct FormDefinition {
    /// Optional heading shown above the form.
    pub title: Option<String>,

    /// Optional text shown between the heading and the fields.
    pub description: Option<String>,

    /// All fields in display order.
    pub fields: Vec<Field>,

    /// Label for the area the result is shown in.
    pub output_label: String,
}

impl FormDefinition {
    /// Create a new form definition with the given fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            title: None,
            description: None,
            fields,
            output_label: "Output".to_string(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the output label.
    pub fn with_output_label(mut self, label: impl Into<String>) -> Self {
        self.output_label = label.into();
        self
    }

    /// Get the fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find a field by path.
    pub fn field(&self, path: &FieldPath) -> Option<&Field> {
        self.fields.iter().find(|f| f.path() == path)
    }

    /// Find a field by path, mutably.
    pub fn field_mut(&mut self, path: &FieldPath) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.path() == path)
    }

    /// Check if the form has any fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
