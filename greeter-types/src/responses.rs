use std::collections::HashMap;

use crate::{FieldPath, FieldValue};

/// Error type for response access operations.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing response for field: {0}")]
    MissingPath(FieldPath),

    #[error("Type mismatch at field '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Values submitted for a form, keyed by field path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    values: HashMap<FieldPath, FieldValue>,
}

impl Responses {
    /// Create a new empty responses collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a value at the given path, replacing any previous one.
    pub fn insert(&mut self, path: impl Into<FieldPath>, value: impl Into<FieldValue>) {
        self.values.insert(path.into(), value.into());
    }

    /// Get a value at the given path.
    pub fn get(&self, path: &FieldPath) -> Option<&FieldValue> {
        self.values.get(path)
    }

    /// Check if a response exists at the given path.
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.values.contains_key(path)
    }

    /// Get an iterator over all path-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &FieldValue)> {
        self.values.iter()
    }

    /// Get the number of responses.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no responses.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a text value at the given path.
    pub fn get_text(&self, path: &FieldPath) -> Result<&str, ResponseError> {
        match self.get(path) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                path: path.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingPath(path.clone())),
        }
    }

    /// Get an integer value at the given path.
    pub fn get_int(&self, path: &FieldPath) -> Result<i64, ResponseError> {
        match self.get(path) {
            Some(FieldValue::Int(i)) => Ok(*i),
            Some(other) => Err(ResponseError::TypeMismatch {
                path: path.clone(),
                expected: "Int",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingPath(path.clone())),
        }
    }
}

impl<'a> IntoIterator for &'a Responses {
    type Item = (&'a FieldPath, &'a FieldValue);
    type IntoIter = std::collections::hash_map::Iter<'a, FieldPath, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
