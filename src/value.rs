// Loosely-typed raw values and three-valued boolean coercion
// Source data quality is unreliable: flags arrive as bools, numbers, or text

use serde::{Deserialize, Serialize};

// ============================================================================
// RAW VALUE
// ============================================================================

/// A field value as it arrives from a producer, before coercion.
///
/// Scrapers and spreadsheet imports hand over whatever the source had: a real
/// boolean, a number, a string like "Yes", or nothing at all. `RawValue` is
/// the closed set of shapes the pipeline accepts; anything outside it (JSON
/// arrays, objects) degrades to `Absent`.
///
/// Serialized form is untagged, so JSON scalars map directly onto variants
/// and `Absent` round-trips as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    #[default]
    Absent,
}

impl RawValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => RawValue::Absent,
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Absent,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    RawValue::Float(f)
                } else {
                    RawValue::Absent
                }
            }
            serde_json::Value::String(s) => RawValue::Text(s),
            // Arrays and objects are not boolean-like in any source we ingest
            _ => RawValue::Absent,
        }
    }
}

// ============================================================================
// BOOLEAN COERCION
// ============================================================================

/// Coerce a loosely-typed value into a three-valued boolean.
///
/// `None` means absent/unknown, and is distinct from `Some(false)`.
/// This never fails: unrecognized input resolves to `None` so a single
/// malformed flag cannot abort an import batch.
///
/// Recognized text tokens (after trimming and lowercasing):
/// true: `true`, `t`, `yes`, `y`, `1` / false: `false`, `f`, `no`, `n`, `0`.
/// Numeric input maps only from exact 1/1.0 and 0/0.0; any other number is
/// ambiguous and resolves to absent.
pub fn convert_boolean(value: &RawValue) -> Option<bool> {
    match value {
        RawValue::Absent => None,
        RawValue::Bool(b) => Some(*b),
        RawValue::Int(1) => Some(true),
        RawValue::Int(0) => Some(false),
        RawValue::Int(_) => None,
        RawValue::Float(x) => {
            if *x == 1.0 {
                Some(true)
            } else if *x == 0.0 {
                Some(false)
            } else {
                None
            }
        }
        RawValue::Text(s) => match s.trim().to_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
