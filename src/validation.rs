//! Shape checks on an incoming breach check body.
//!
//! Runs before any outbound call. A field counts as missing when it is
//! absent or holds a falsy JSON value (`null`, `""`, `false`, `0`).

use crate::error::ValidationError;
use crate::models::{BreachQuery, IdentifierType};
use serde_json::Value;

pub fn validate(payload: &Value) -> Result<BreachQuery, ValidationError> {
    let kind = present(payload, "type");
    let value = present(payload, "value");

    let missing: Vec<&'static str> = [("type", kind.is_none()), ("value", value.is_none())]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

    let (Some(kind), Some(value)) = (kind, value) else {
        return Err(ValidationError::Missing(missing));
    };

    let kind = match kind.as_str() {
        Some(raw) => raw
            .parse::<IdentifierType>()
            .map_err(ValidationError::UnsupportedType)?,
        None => return Err(ValidationError::UnsupportedType(kind.to_string())),
    };

    let value = value
        .as_str()
        .ok_or_else(|| ValidationError::InvalidValue(json_kind(value)))?;

    Ok(BreachQuery {
        kind,
        value: value.to_string(),
    })
}

fn present<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|v| !is_falsy(v))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
