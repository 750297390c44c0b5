//! Dialoguer backend implementation for FormBackend trait.

use dialoguer::{Input, theme::ColorfulTheme};
use greeter::{
    DefaultValue, Field, FieldKind, FieldPath, FieldValue, FormBackend, FormDefinition, Responses,
    SliderField, TextField,
};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the form (e.g., pressed Ctrl+C or Escape).
    #[error("Form cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn map_err(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer backend for interactive CLI prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Ask a single field and store the response.
    fn ask_field(
        &self,
        field: &Field,
        responses: &mut Responses,
        validate: &dyn Fn(&FieldValue, &Responses, &FieldPath) -> Result<(), String>,
    ) -> Result<(), DialoguerError> {
        let path = field.path();

        // Assumed values skip the prompt entirely
        if let DefaultValue::Assumed(value) = field.default() {
            tracing::debug!(%path, "using assumed value");
            responses.insert(path, value.clone());
            return Ok(());
        }

        let prompt = prompt_for(field);
        let initial = field.initial_value();

        match field.kind() {
            FieldKind::Text(text_f) => {
                self.ask_text(path, &prompt, text_f, &initial, responses, validate)
            }
            FieldKind::Slider(slider) => {
                self.ask_slider(path, &prompt, slider, &initial, responses, validate)
            }
        }
    }

    fn ask_text(
        &self,
        path: &FieldPath,
        prompt: &str,
        text_f: &TextField,
        initial: &FieldValue,
        responses: &mut Responses,
        validate: &dyn Fn(&FieldValue, &Responses, &FieldPath) -> Result<(), String>,
    ) -> Result<(), DialoguerError> {
        let prompt = match &text_f.placeholder {
            Some(placeholder) => format!("{prompt} ({placeholder})"),
            None => prompt.to_string(),
        };

        loop {
            let mut _theme;
            let mut builder: Input<String>;
            if self.colorful {
                _theme = ColorfulTheme::default();
                builder = Input::with_theme(&_theme);
            } else {
                builder = Input::new();
            }

            builder = builder.with_prompt(&prompt).allow_empty(true);

            if let Some(default) = initial.as_str().filter(|s| !s.is_empty()) {
                builder = builder.default(default.to_string());
            }

            let value = builder.interact_text().map_err(map_err)?;
            let rv = FieldValue::Text(value);
            if let Err(msg) = validate(&rv, responses, path) {
                println!("Error: {msg}");
                continue;
            }
            responses.insert(path, rv);
            return Ok(());
        }
    }

    fn ask_slider(
        &self,
        path: &FieldPath,
        prompt: &str,
        slider: &SliderField,
        initial: &FieldValue,
        responses: &mut Responses,
        validate: &dyn Fn(&FieldValue, &Responses, &FieldPath) -> Result<(), String>,
    ) -> Result<(), DialoguerError> {
        let prompt = format!("{prompt} [{}-{}]", slider.min, slider.max);

        loop {
            let mut _theme;
            let mut builder: Input<i64>;
            if self.colorful {
                _theme = ColorfulTheme::default();
                builder = Input::with_theme(&_theme);
            } else {
                builder = Input::new();
            }

            builder = builder
                .with_prompt(&prompt)
                .default(initial.as_int().unwrap_or(slider.default));

            let value = builder.interact_text().map_err(map_err)?;

            if let Some(msg) = slider_error(slider, value) {
                println!("Error: {msg}");
                continue;
            }

            let rv = FieldValue::Int(value);
            if let Err(msg) = validate(&rv, responses, path) {
                println!("Error: {msg}");
                continue;
            }
            responses.insert(path, rv);
            return Ok(());
        }
    }
}

/// Use the field's label, or fall back to a title-cased version of the path.
fn prompt_for(field: &Field) -> String {
    if !field.label().is_empty() {
        return field.label().to_string();
    }
    field
        .path()
        .last()
        .unwrap_or("")
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Why `value` cannot be chosen on `slider`, if it can't.
fn slider_error(slider: &SliderField, value: i64) -> Option<String> {
    if value < slider.min {
        Some(format!("Value must be at least {}", slider.min))
    } else if value > slider.max {
        Some(format!("Value must be at most {}", slider.max))
    } else if value.abs_diff(slider.min) % slider.step.unsigned_abs() != 0 {
        Some(format!("Value must be a multiple of {} from {}", slider.step, slider.min))
    } else {
        None
    }
}

impl FormBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn collect(
        &self,
        definition: &FormDefinition,
        validate: &dyn Fn(&FieldValue, &Responses, &FieldPath) -> Result<(), String>,
    ) -> Result<Responses, Self::Error> {
        let mut responses = Responses::new();

        if let Some(title) = &definition.title {
            println!("{title}");
        }
        if let Some(description) = &definition.description {
            println!("{description}");
        }
        if definition.title.is_some() || definition.description.is_some() {
            println!();
        }

        for field in definition.fields() {
            self.ask_field(field, &mut responses, validate)?;
        }

        Ok(responses)
    }

    fn is_cancellation(err: &Self::Error) -> bool {
        matches!(err, DialoguerError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use greeter::{Form, GreetingRequest};

    use super::*;

    #[test]
    fn backend_creation() {
        assert!(DialoguerBackend::new().colorful);
        assert!(!DialoguerBackend::plain().colorful);
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Form cancelled by user");
        assert!(DialoguerBackend::is_cancellation(&err));
    }

    #[test]
    fn interrupted_io_is_cancellation() {
        let err = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(map_err(err), DialoguerError::Cancelled));

        let err = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(matches!(map_err(err), DialoguerError::Dialoguer(_)));
    }

    #[test]
    fn prompts_use_labels() {
        let form = GreetingRequest::form();
        assert_eq!(prompt_for(&form.fields()[0]), "Name");
        assert_eq!(prompt_for(&form.fields()[1]), "Number of Greetings");
    }

    #[test]
    fn prompt_falls_back_to_path() {
        let field = Field::new(
            "greeting.favourite_colour",
            "",
            FieldKind::Text(TextField::new()),
        );
        assert_eq!(prompt_for(&field), "Favourite Colour");
    }

    #[test]
    fn slider_bounds() {
        let slider = SliderField::new(1, 10);
        assert_eq!(slider_error(&slider, 1), None);
        assert_eq!(slider_error(&slider, 10), None);
        assert_eq!(
            slider_error(&slider, 0),
            Some("Value must be at least 1".to_string())
        );
        assert_eq!(
            slider_error(&slider, 11),
            Some("Value must be at most 10".to_string())
        );
    }

    #[test]
    fn slider_with_extreme_bounds() {
        let slider = SliderField::new(i64::MIN, i64::MAX);
        assert_eq!(slider_error(&slider, i64::MAX), None);
        assert_eq!(slider_error(&slider, 0), None);

        let stepped = SliderField::new(i64::MIN, i64::MAX).with_step(2);
        assert_eq!(slider_error(&stepped, i64::MAX - 1), None);
        assert!(slider_error(&stepped, i64::MAX).is_some());
    }

    #[test]
    fn slider_step() {
        let slider = SliderField::new(0, 10).with_step(5);
        assert_eq!(slider_error(&slider, 5), None);
        assert!(slider_error(&slider, 3).is_some());
    }
}
