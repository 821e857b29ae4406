//! Boundary parsing of loosely typed request values.

use serde_json::Value;

/// Parse a query-string integer. Absent or unparsable input yields `None`.
pub fn query_int(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// Why a JSON value could not be read as an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    /// Not a number, not integral, or below the 32-bit range.
    Invalid,
    /// An integer above `i32::MAX`.
    TooLarge,
}

impl NumberError {
    /// Client message for `field`; `invalid` is the field's general rule.
    pub fn message(self, field: &str, invalid: &str) -> String {
        match self {
            NumberError::Invalid => invalid.to_string(),
            NumberError::TooLarge => format!("{field} must be at most {}", i32::MAX),
        }
    }
}

/// Read a JSON number as an `i32`. Integral floats such as `3.0` are
/// accepted; fractions and non-numbers are not.
pub fn json_i32(value: &Value) -> Result<i32, NumberError> {
    let n: i128 = if let Some(n) = value.as_i64() {
        n.into()
    } else if let Some(n) = value.as_u64() {
        n.into()
    } else {
        let f = value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .ok_or(NumberError::Invalid)?;
        if f > i32::MAX as f64 {
            return Err(NumberError::TooLarge);
        }
        if f < i32::MIN as f64 {
            return Err(NumberError::Invalid);
        }
        f as i128
    };

    if n > i128::from(i32::MAX) {
        return Err(NumberError::TooLarge);
    }
    i32::try_from(n).map_err(|_| NumberError::Invalid)
}

/// Whether a body field counts as not provided: absent, `null`, `false`,
/// `0`, or `""`.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}
