//! Core types for the greeter crate.
//!
//! This crate describes a form without knowing how it is shown:
//! - `FormDefinition` - The top-level form structure
//! - `Field` and `FieldKind` - Individual inputs and their widgets
//! - `Responses` and `FieldPath` - Submitted data and its keys
//! - `Form` and `FormBackend` traits - For implementing forms and backends

mod field_path;
pub use field_path::FieldPath;

mod field_value;
pub use field_value::FieldValue;

mod responses;
pub use responses::{ResponseError, Responses};

mod default_value;
pub use default_value::DefaultValue;

mod field;
pub use field::{Field, FieldKind, SliderField, TextField};

mod form_definition;
pub use form_definition::FormDefinition;

mod error;
pub use error::FormError;

mod traits;
pub use traits::{Form, FormBackend};

mod builder;
pub use builder::FormBuilder;
