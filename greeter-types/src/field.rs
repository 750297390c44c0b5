use crate::{DefaultValue, FieldPath, FieldValue};

/// A single input on a form.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The key this field's value is stored under in `Responses`.
    path: FieldPath,

    /// The label shown next to the widget.
    label: String,

    /// The widget used to collect the value.
    kind: FieldKind,

    /// Default value for this field (none, suggested, or assumed).
    default: DefaultValue,
}

impl Field {
    /// Create a new field.
    pub fn new(path: impl Into<FieldPath>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind,
            default: DefaultValue::None,
        }
    }

    /// Get the field path.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Get the default value.
    pub fn default(&self) -> &DefaultValue {
        &self.default
    }

    /// Set a suggested value (user can modify).
    pub fn set_suggestion(&mut self, value: impl Into<FieldValue>) {
        self.default = DefaultValue::Suggested(value.into());
    }

    /// Set an assumed value (field is skipped entirely).
    pub fn set_assumption(&mut self, value: impl Into<FieldValue>) {
        self.default = DefaultValue::Assumed(value.into());
    }

    /// Check if this field should be skipped (has an assumed value).
    pub fn is_assumed(&self) -> bool {
        self.default.is_assumed()
    }

    /// The value the widget starts out with.
    ///
    /// A suggestion or assumption wins over the widget's own default.
    pub fn initial_value(&self) -> FieldValue {
        if let Some(value) = self.default.value() {
            return value.clone();
        }
        match &self.kind {
            FieldKind::Text(text) => FieldValue::Text(text.default.clone().unwrap_or_default()),
            FieldKind::Slider(slider) => FieldValue::Int(slider.default),
        }
    }
}

/// The widget used for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free-text input.
    Text(TextField),

    /// Bounded integer slider.
    Slider(SliderField),
}

/// Configuration for a text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    /// Hint shown while the box is empty.
    pub placeholder: Option<String>,

    /// Number of visible lines. `1` renders a single-line input.
    pub lines: u16,

    /// Optional default value.
    pub default: Option<String>,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            placeholder: None,
            lines: 1,
            default: None,
        }
    }
}

impl TextField {
    /// Create a single-line text box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the number of visible lines.
    pub fn with_lines(mut self, lines: u16) -> Self {
        self.lines = lines.max(1);
        self
    }

    /// Whether this renders as a multi-line text area.
    pub fn is_multiline(&self) -> bool {
        self.lines > 1
    }
}

/// Configuration for an integer slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderField {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
}

impl SliderField {
    /// Create a slider over `min..=max` with step 1, starting at `min`.
    ///
    /// The bounds are swapped if given in the wrong order.
    pub fn new(min: i64, max: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            step: 1,
            default: min,
        }
    }

    /// Set the step between selectable values (at least 1).
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step.max(1);
        self
    }

    /// Set the starting value, clamped into range.
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = self.clamp(default);
        self
    }

    /// Check whether `value` lies within the slider's range.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp `value` into the slider's range.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_bounds() {
        let slider = SliderField::new(1, 10).with_default(1);
        assert!(slider.contains(1));
        assert!(slider.contains(10));
        assert!(!slider.contains(0));
        assert!(!slider.contains(11));
        assert_eq!(slider.clamp(42), 10);
        assert_eq!(slider.clamp(-3), 1);
    }

    #[test]
    fn slider_swaps_reversed_bounds() {
        let slider = SliderField::new(10, 1);
        assert_eq!((slider.min, slider.max), (1, 10));
    }

    #[test]
    fn slider_default_is_clamped() {
        assert_eq!(SliderField::new(1, 10).with_default(50).default, 10);
    }

    #[test]
    fn initial_value_prefers_suggestion() {
        let mut field = Field::new("count", "Count", FieldKind::Slider(SliderField::new(1, 10)));
        assert_eq!(field.initial_value(), FieldValue::Int(1));

        field.set_suggestion(4);
        assert_eq!(field.initial_value(), FieldValue::Int(4));
        assert!(!field.is_assumed());
    }

    #[test]
    fn text_initial_value_is_empty() {
        let field = Field::new("name", "Name", FieldKind::Text(TextField::new()));
        assert_eq!(field.initial_value(), FieldValue::Text(String::new()));
    }

    #[test]
    fn text_lines() {
        assert!(!TextField::new().is_multiline());
        assert!(TextField::new().with_lines(4).is_multiline());
        assert_eq!(TextField::new().with_lines(0).lines, 1);
    }
}
