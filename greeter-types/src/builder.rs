use std::marker::PhantomData;

use crate::{FieldPath, FieldValue, Form, FormBackend, FormDefinition, FormError};

/// Prepares a form run: pre-fill or fix field values, then hand it to a backend.
///
/// ```
/// use greeter_types::{Form, FormBuilder};
/// # use greeter_types::*;
/// # struct Named { name: String }
/// # impl Form for Named {
/// #     fn form() -> FormDefinition {
/// #         FormDefinition::new(vec![Field::new("name", "Name", FieldKind::Text(TextField::new()))])
/// #     }
/// #     fn from_responses(r: &Responses) -> Result<Self, ResponseError> {
/// #         Ok(Self { name: r.get_text(&FieldPath::new("name"))?.to_string() })
/// #     }
/// #     fn validate_field(_: &FieldValue, _: &Responses, _: &FieldPath) -> Result<(), String> { Ok(()) }
/// # }
/// let builder = FormBuilder::<Named>::new().suggest("name", "Alice");
/// let field = builder.definition().field(&FieldPath::new("name")).unwrap();
/// assert_eq!(field.initial_value(), FieldValue::from("Alice"));
/// ```
#[derive(Debug, Clone)]
pub struct FormBuilder<F> {
    definition: FormDefinition,
    _form: PhantomData<F>,
}

impl<F: Form> Default for FormBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Form> FormBuilder<F> {
    /// Start from the form's own definition.
    pub fn new() -> Self {
        Self {
            definition: F::form(),
            _form: PhantomData,
        }
    }

    /// The definition as it will be handed to the backend.
    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Pre-fill a field; the user may still change it.
    ///
    /// Unknown paths are ignored.
    pub fn suggest(mut self, path: impl Into<FieldPath>, value: impl Into<FieldValue>) -> Self {
        let path = path.into();
        match self.definition.field_mut(&path) {
            Some(field) => field.set_suggestion(value),
            None => tracing::warn!(%path, "ignoring suggestion for unknown field"),
        }
        self
    }

    /// Fix a field's value; the field is not shown.
    ///
    /// Unknown paths are ignored.
    pub fn assume(mut self, path: impl Into<FieldPath>, value: impl Into<FieldValue>) -> Self {
        let path = path.into();
        match self.definition.field_mut(&path) {
            Some(field) => field.set_assumption(value),
            None => tracing::warn!(%path, "ignoring assumption for unknown field"),
        }
        self
    }

    /// Collect responses through `backend` and build the form value.
    pub fn run<B: FormBackend>(self, backend: B) -> Result<F, FormError> {
        tracing::debug!(fields = self.definition.len(), "collecting form responses");
        let responses = backend
            .collect(&self.definition, &|value, responses, path| {
                F::validate_field(value, responses, path)
            })
            .map_err(|err| {
                if B::is_cancellation(&err) {
                    FormError::Cancelled
                } else {
                    FormError::backend(err)
                }
            })?;
        Ok(F::from_responses(&responses)?)
    }
}
