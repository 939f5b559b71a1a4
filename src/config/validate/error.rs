//! Validation error types
//!
//! Every variant names the offending field so a caller can point the author
//! straight at the line to fix.

use std::fmt;

/// Field name used for problems with the document as a whole
pub const DOCUMENT: &str = "<document>";

/// A single field-level validation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: required field is missing")]
    Missing { field: String },

    #[error("{field}: expected {expected}, found {found}")]
    WrongType { field: String, expected: String, found: String },

    #[error("{field}: {value} is out of range (expected {constraint})")]
    OutOfRange { field: String, value: String, constraint: String },

    #[error("{field}: unsupported value '{value}' ({allowed})")]
    UnsupportedValue { field: String, value: String, allowed: String },

    #[error("{field}: environment '{env}' is not registered (known: {known})")]
    UnknownEnvironment { field: String, env: String, known: String },

    #[error("{field}: '{path}' is not a valid relative path ({reason})")]
    InvalidPath { field: String, path: String, reason: String },

    #[error("configuration keys must be strings, found {key}")]
    NonStringKey { key: String },

    #[error("configuration must be a mapping, found {found}")]
    NotAMapping { found: String },

    #[error("invalid YAML: {message}")]
    Syntax { message: String },
}

impl ValidationError {
    /// Name of the field this error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::WrongType { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::UnsupportedValue { field, .. }
            | Self::UnknownEnvironment { field, .. }
            | Self::InvalidPath { field, .. } => field,
            Self::NonStringKey { key } => key,
            Self::NotAMapping { .. } | Self::Syntax { .. } => DOCUMENT,
        }
    }
}

/// Every problem found in one configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Field names in report order
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(ValidationError::field).collect()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 { "error" } else { "errors" };
        write!(f, "{} validation {noun}", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
