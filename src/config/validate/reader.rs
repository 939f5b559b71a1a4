//! Typed field access over a raw YAML mapping, accumulating errors.

use super::error::ValidationError;
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Describe a YAML value's type for error messages
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn wrong_type(field: &str, expected: &str, value: &Value) -> ValidationError {
    let found = match value {
        Value::String(s) => format!("string '{s}'"),
        Value::Number(n) => format!("{} {n}", kind(value)),
        other => kind(other).to_string(),
    };
    ValidationError::WrongType { field: field.to_string(), expected: expected.to_string(), found }
}

fn out_of_range(field: &str, value: impl ToString, constraint: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        constraint: constraint.to_string(),
    }
}

/// Reads fields out of a mapping, recording at most one error per field
pub(crate) struct FieldReader<'a> {
    map: &'a Mapping,
    consumed: HashSet<&'static str>,
    errors: Vec<ValidationError>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(map: &'a Mapping) -> Self {
        let mut errors = Vec::new();
        for key in map.keys() {
            if !key.is_string() {
                let key = serde_yaml::to_string(key)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_else(|_| kind(key).to_string());
                errors.push(ValidationError::NonStringKey { key });
            }
        }
        Self { map, consumed: HashSet::new(), errors }
    }

    /// A present, non-null value; `key:` with nothing after it counts as absent
    fn lookup(&mut self, field: &'static str) -> Option<&'a Value> {
        self.consumed.insert(field);
        self.map.get(field).filter(|v| !v.is_null())
    }

    fn read<T>(
        &mut self,
        field: &'static str,
        required: bool,
        convert: impl FnOnce(&str, &Value) -> Result<T, ValidationError>,
    ) -> Option<T> {
        let Some(value) = self.lookup(field) else {
            if required {
                self.errors.push(ValidationError::Missing { field: field.to_string() });
            }
            return None;
        };
        match convert(field, value) {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    pub(crate) fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub(crate) fn required<T>(
        &mut self,
        field: &'static str,
        convert: impl FnOnce(&str, &Value) -> Result<T, ValidationError>,
    ) -> Option<T> {
        self.read(field, true, convert)
    }

    pub(crate) fn optional<T>(
        &mut self,
        field: &'static str,
        convert: impl FnOnce(&str, &Value) -> Result<T, ValidationError>,
    ) -> Option<T> {
        self.read(field, false, convert)
    }

    /// Unknown string keys, in document order
    pub(crate) fn leftovers(&self) -> Mapping {
        self.map
            .iter()
            .filter(|(k, _)| k.as_str().is_some_and(|k| !self.consumed.contains(k)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub(crate) fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

// ---------------------------------------------------------------------------
// Converters
// ---------------------------------------------------------------------------

/// Literal `true` / `false` only
pub(crate) fn boolean(field: &str, value: &Value) -> Result<bool, ValidationError> {
    value.as_bool().ok_or_else(|| wrong_type(field, "boolean (true or false)", value))
}

/// Non-negative integer; integral floats such as `1e6` are accepted
pub(crate) fn count(field: &str, value: &Value) -> Result<u64, ValidationError> {
    let Value::Number(n) = value else {
        return Err(wrong_type(field, "non-negative integer", value));
    };
    if let Some(u) = n.as_u64() {
        return Ok(u);
    }
    if let Some(i) = n.as_i64() {
        return Err(out_of_range(field, i, ">= 0"));
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f < 0.0 => Err(out_of_range(field, f, ">= 0")),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            Err(out_of_range(field, f, &format!("<= {}", u64::MAX)))
        }
        _ => Err(wrong_type(field, "non-negative integer", value)),
    }
}

/// Count that must be at least one
pub(crate) fn positive_count(field: &str, value: &Value) -> Result<u64, ValidationError> {
    match count(field, value)? {
        0 => Err(out_of_range(field, 0, ">= 1")),
        n => Ok(n),
    }
}

/// Any finite number
pub(crate) fn number(field: &str, value: &Value) -> Result<f64, ValidationError> {
    let f = match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
    .ok_or_else(|| wrong_type(field, "number", value))?;
    if f.is_finite() {
        Ok(f)
    } else {
        Err(out_of_range(field, f, "a finite number"))
    }
}

pub(crate) fn non_negative(field: &str, value: &Value) -> Result<f64, ValidationError> {
    let f = number(field, value)?;
    if f < 0.0 {
        return Err(out_of_range(field, f, ">= 0"));
    }
    Ok(f)
}

pub(crate) fn strictly_positive(field: &str, value: &Value) -> Result<f64, ValidationError> {
    let f = number(field, value)?;
    if f <= 0.0 {
        return Err(out_of_range(field, f, "> 0"));
    }
    Ok(f)
}

/// Number in the closed interval [0, 1]
pub(crate) fn probability(field: &str, value: &Value) -> Result<f64, ValidationError> {
    let f = number(field, value)?;
    if !(0.0..=1.0).contains(&f) {
        return Err(out_of_range(field, f, "a value in [0, 1]"));
    }
    Ok(f)
}

pub(crate) fn text(field: &str, value: &Value) -> Result<String, ValidationError> {
    value.as_str().map(str::to_string).ok_or_else(|| wrong_type(field, "string", value))
}

pub(crate) fn non_empty_text(field: &str, value: &Value) -> Result<String, ValidationError> {
    let s = text(field, value)?;
    if s.trim().is_empty() {
        return Err(out_of_range(field, "''", "a non-empty string"));
    }
    Ok(s)
}

/// One of a closed set of spellings
pub(crate) fn choice<T>(field: &str, value: &Value) -> Result<T, ValidationError>
where
    T: FromStr<Err = String>,
{
    let s = text(field, value)?;
    s.parse().map_err(|allowed| ValidationError::UnsupportedValue {
        field: field.to_string(),
        value: s,
        allowed,
    })
}

pub(crate) fn mapping(field: &str, value: &Value) -> Result<Mapping, ValidationError> {
    value.as_mapping().cloned().ok_or_else(|| wrong_type(field, "mapping", value))
}

/// A relative filesystem path: non-empty, no root or drive prefix, no NUL
pub(crate) fn relative_path(field: &str, value: &Value) -> Result<PathBuf, ValidationError> {
    let raw = text(field, value)?;
    let invalid = |reason: &str| ValidationError::InvalidPath {
        field: field.to_string(),
        path: raw.clone(),
        reason: reason.to_string(),
    };

    if raw.trim().is_empty() {
        return Err(invalid("empty path"));
    }
    if raw.contains('\0') {
        return Err(invalid("contains a NUL byte"));
    }
    let bytes = raw.as_bytes();
    let has_drive = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    let path = Path::new(&raw);
    if path.has_root() || path.is_absolute() || has_drive || raw.starts_with('\\') {
        return Err(invalid("must be relative"));
    }
    if path.components().any(|c| matches!(c, Component::Prefix(_))) {
        return Err(invalid("must be relative"));
    }
    Ok(PathBuf::from(&raw))
}
