//! Field validation and coercion for Digimon records.
//!
//! Request bodies arrive loosely typed: `nivel` may be a JSON number or a
//! numeric string, and text fields may be absent or empty. These helpers
//! turn that wire-level looseness into validated domain values, producing
//! the user-facing validation messages.

use serde::Deserialize;

use crate::error::CoreError;

/// Validation message for a missing required field.
pub const MSG_FIELDS_REQUIRED: &str = "Todos los campos son requeridos";

/// Validation message for a non-numeric `nivel`.
pub const MSG_LEVEL_NOT_NUMERIC: &str = "nivel debe ser numérico";

/// A `nivel` value as it appears on the wire: a JSON number or a string
/// that should contain one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LevelInput {
    Number(f64),
    Text(String),
}

impl LevelInput {
    /// Coerce to a finite number.
    ///
    /// Numbers pass through; strings must parse as `f64`. Non-numeric or
    /// non-finite input is a validation error, distinct from the
    /// missing-field error.
    pub fn to_number(&self) -> Result<f64, CoreError> {
        let value = match self {
            LevelInput::Number(n) => *n,
            LevelInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoreError::Validation(MSG_LEVEL_NOT_NUMERIC.to_string()))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CoreError::Validation(MSG_LEVEL_NOT_NUMERIC.to_string()))
        }
    }
}

/// Require a text field to be present and non-empty.
///
/// An empty string counts as absent, matching the create contract where
/// every field must carry a value.
pub fn require_text(value: Option<&str>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(MSG_FIELDS_REQUIRED.to_string())),
    }
}

/// Require a `nivel` to be present, then coerce it to a number.
pub fn require_level(value: Option<&LevelInput>) -> Result<f64, CoreError> {
    match value {
        Some(level) => level.to_number(),
        None => Err(CoreError::Validation(MSG_FIELDS_REQUIRED.to_string())),
    }
}
