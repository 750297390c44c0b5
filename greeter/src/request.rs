use greeter_types::{
    Field, FieldKind, FieldPath, FieldValue, Form, FormBuilder, FormDefinition, ResponseError,
    Responses, SliderField, TextField,
};

use crate::{GreetError, greet, greet::positive_count};

/// The inputs of one greeting: who to greet and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingRequest {
    pub name: String,
    pub repetitions: i64,
}

impl GreetingRequest {
    /// Field path of the name text box.
    pub const NAME: &'static str = "name";

    /// Field path of the repetitions slider.
    pub const REPETITIONS: &'static str = "repetitions";

    pub fn new(name: impl Into<String>, repetitions: i64) -> Self {
        Self {
            name: name.into(),
            repetitions,
        }
    }

    /// Start a form run for a greeting request.
    pub fn builder() -> FormBuilder<Self> {
        FormBuilder::new()
    }

    /// Produce the greeting for this request.
    pub fn respond(&self) -> Result<String, GreetError> {
        greet(&self.name, self.repetitions)
    }
}

impl Form for GreetingRequest {
    fn form() -> FormDefinition {
        FormDefinition::new(vec![
            Field::new(
                Self::NAME,
                "Name",
                FieldKind::Text(TextField::new().with_placeholder("Enter your name")),
            ),
            Field::new(
                Self::REPETITIONS,
                "Number of Greetings",
                FieldKind::Slider(SliderField::new(1, 10).with_step(1).with_default(1)),
            ),
        ])
        .with_title("Personalized Greeter")
        .with_description("Enter your name and select the number of greetings.")
        .with_output_label("Output")
    }

    fn from_responses(responses: &Responses) -> Result<Self, ResponseError> {
        Ok(Self {
            name: responses.get_text(&FieldPath::new(Self::NAME))?.to_string(),
            repetitions: responses.get_int(&FieldPath::new(Self::REPETITIONS))?,
        })
    }

    fn validate_field(
        value: &FieldValue,
        _responses: &Responses,
        path: &FieldPath,
    ) -> Result<(), String> {
        if path.as_str() != Self::REPETITIONS {
            return Ok(());
        }
        match value {
            FieldValue::Int(n) => positive_count(*n).map(|_| ()).map_err(|err| {
                tracing::warn!(repetitions = n, "rejected repetitions");
                err.to_string()
            }),
            other => Err(format!("Expected an integer, got {}", other.type_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_layout() {
        let form = GreetingRequest::form();

        assert_eq!(form.title.as_deref(), Some("Personalized Greeter"));
        assert_eq!(
            form.description.as_deref(),
            Some("Enter your name and select the number of greetings.")
        );
        assert_eq!(form.len(), 2);
        assert_eq!(form.output_label, "Output");

        let name = &form.fields()[0];
        assert_eq!(name.label(), "Name");
        match name.kind() {
            FieldKind::Text(text) => {
                assert_eq!(text.placeholder.as_deref(), Some("Enter your name"));
                assert_eq!(text.lines, 1);
            }
            other => panic!("Expected Text field, got {other:?}"),
        }

        let reps = &form.fields()[1];
        assert_eq!(reps.label(), "Number of Greetings");
        assert_eq!(
            reps.kind(),
            &FieldKind::Slider(SliderField {
                min: 1,
                max: 10,
                step: 1,
                default: 1
            })
        );
    }

    #[test]
    fn validate_repetitions() {
        let path = FieldPath::new(GreetingRequest::REPETITIONS);
        let responses = Responses::new();

        assert!(GreetingRequest::validate_field(&FieldValue::Int(1), &responses, &path).is_ok());
        assert!(GreetingRequest::validate_field(&FieldValue::Int(50), &responses, &path).is_ok());
        assert_eq!(
            GreetingRequest::validate_field(&FieldValue::Int(0), &responses, &path),
            Err("Greeting repetitions must be a positive integer.".to_string())
        );
        assert!(
            GreetingRequest::validate_field(&FieldValue::from("3"), &responses, &path).is_err()
        );
    }

    #[test]
    fn any_name_is_valid() {
        let path = FieldPath::new(GreetingRequest::NAME);
        let responses = Responses::new();
        for name in ["", "Alice", "<script>"] {
            assert!(
                GreetingRequest::validate_field(&FieldValue::from(name), &responses, &path).is_ok()
            );
        }
    }

    #[test]
    fn from_responses_requires_both_fields() {
        let mut responses = Responses::new();
        responses.insert(GreetingRequest::NAME, "Alice");
        assert!(matches!(
            GreetingRequest::from_responses(&responses),
            Err(ResponseError::MissingPath(_))
        ));

        responses.insert(GreetingRequest::REPETITIONS, 2);
        assert_eq!(
            GreetingRequest::from_responses(&responses).unwrap(),
            GreetingRequest::new("Alice", 2)
        );
    }

    #[test]
    fn respond_delegates_to_greet() {
        assert_eq!(
            GreetingRequest::new("Alice", 2).respond().unwrap(),
            "Hello, Alice!Hello, Alice!"
        );
        assert!(GreetingRequest::new("Alice", 0).respond().is_err());
    }
}
