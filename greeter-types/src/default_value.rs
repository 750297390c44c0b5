use crate::FieldValue;

/// Default value for a field.
///
/// Controls whether a field is pre-filled and whether it is shown at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DefaultValue {
    /// No default value, the widget's own default applies.
    #[default]
    None,

    /// A suggested value that the user can accept or modify.
    Suggested(FieldValue),

    /// An assumed value. The field is not shown; this value is used directly.
    Assumed(FieldValue),
}

impl DefaultValue {
    /// Check if this is the None variant.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Check if this is an assumed value (field should be skipped).
    pub fn is_assumed(&self) -> bool {
        matches!(self, Self::Assumed(_))
    }

    /// Get the inner value if this is Suggested or Assumed.
    pub fn value(&self) -> Option<&FieldValue> {
        match self {
            Self::None => None,
            Self::Suggested(v) | Self::Assumed(v) => Some(v),
        }
    }
}
