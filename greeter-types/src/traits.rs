use crate::{FieldPath, FieldValue, FormDefinition, ResponseError, Responses};

/// Trait for types that can be filled in through a form.
pub trait Form: Sized {
    /// Returns the form structure (fields, labels, widget bounds).
    fn form() -> FormDefinition;

    /// Reconstructs an instance from submitted responses.
    fn from_responses(responses: &Responses) -> Result<Self, ResponseError>;

    /// Validates a single field's value.
    ///
    /// Called by backends during input collection to give immediate feedback.
    ///
    /// # Returns
    /// * `Ok(())` if validation passes
    /// * `Err(message)` with a message to show the user otherwise
    fn validate_field(
        value: &FieldValue,
        responses: &Responses,
        path: &FieldPath,
    ) -> Result<(), String>;
}

/// Trait for backend implementations that collect form responses.
///
/// Backends receive a `FormDefinition` and return `Responses`. They decide how
/// to present the form and handle validation internally in retry loops.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect responses for a form.
    ///
    /// Only returns once every non-assumed field has a valid value, or on
    /// error/cancellation.
    fn collect(
        &self,
        definition: &FormDefinition,
        validate: &dyn Fn(&FieldValue, &Responses, &FieldPath) -> Result<(), String>,
    ) -> Result<Responses, Self::Error>;

    /// Whether `err` means the user cancelled rather than the backend failing.
    fn is_cancellation(_err: &Self::Error) -> bool {
        false
    }
}
