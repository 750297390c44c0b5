//! Test backend for running forms without user interaction.
//!
//! `TestBackend` answers a form from pre-defined values. Fields without a
//! configured value fall back to their suggestion or widget default, unless
//! the backend is `strict`.
//!
//! # Example
//!
//! ```rust
//! use greeter::{GreetingRequest, TestBackend};
//!
//! let request = GreetingRequest::builder()
//!     .run(TestBackend::new().with_text("name", "Alice"))
//!     .unwrap();
//!
//! assert_eq!(request, GreetingRequest::new("Alice", 1));
//! ```

use std::collections::HashMap;

use crate::{FieldKind, FieldPath, FieldValue, FormBackend, FormDefinition, Responses};

/// A backend that returns pre-configured responses.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    responses: HashMap<String, FieldValue>,
    strict: bool,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Missing response for field: {0}")]
    MissingResponse(String),

    #[error("Validation failed for '{path}': {message}")]
    ValidationFailed { path: String, message: String },
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on fields that have no configured value instead of using defaults.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Add a response for a given field path.
    pub fn with_response(mut self, path: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.responses.insert(path.into(), value.into());
        self
    }

    /// Add a text response.
    pub fn with_text(self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_response(path, FieldValue::Text(value.into()))
    }

    /// Add an integer response.
    pub fn with_int(self, path: impl Into<String>, value: i64) -> Self {
        self.with_response(path, FieldValue::Int(value))
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn collect(
        &self,
        definition: &FormDefinition,
        validate: &dyn Fn(&FieldValue, &Responses, &FieldPath) -> Result<(), String>,
    ) -> Result<Responses, Self::Error> {
        let mut responses = Responses::new();

        for field in definition.fields() {
            let path = field.path();

            if field.is_assumed() {
                responses.insert(path, field.initial_value());
                continue;
            }

            let value = match self.responses.get(path.as_str()) {
                Some(value) => value.clone(),
                None if self.strict => {
                    return Err(TestBackendError::MissingResponse(path.to_string()));
                }
                None => field.initial_value(),
            };

            if let (FieldKind::Slider(slider), FieldValue::Int(n)) = (field.kind(), &value)
                && !slider.contains(*n)
            {
                return Err(TestBackendError::ValidationFailed {
                    path: path.to_string(),
                    message: format!("Value must be between {} and {}", slider.min, slider.max),
                });
            }

            if let Err(message) = validate(&value, &responses, path) {
                return Err(TestBackendError::ValidationFailed {
                    path: path.to_string(),
                    message,
                });
            }

            responses.insert(path, value);
        }

        Ok(responses)
    }
}
