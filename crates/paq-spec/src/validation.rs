//! Parameter validation against a declarative schema.
//!
//! The host platform owns validation; this module interprets the subset of
//! schema keywords the question modules declare (`type`, `required`,
//! `additionalProperties`, `properties`, `minimum`, `maximum`) so parameters
//! can be checked without a host. Every violation is collected.

use serde_json::{Map, Value};

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::params::params_schema;

/// Validates addition parameters against [`params_schema`].
///
/// # Example
/// ```
/// use paq_spec::validation::validate_params;
/// use serde_json::json;
///
/// assert!(validate_params(&json!({"max": 10, "mc": true})).is_ok());
/// assert!(!validate_params(&json!({"mc": false})).is_ok());
/// ```
pub fn validate_params(value: &Value) -> ValidationResult {
    validate_against_schema(&params_schema(), value)
}

/// Validates a JSON value against a declarative schema.
///
/// # Arguments
/// * `schema` - The schema object
/// * `value` - The value to check
///
/// # Returns
/// * `ValidationResult` with `ok=true` if the value conforms.
/// * `ValidationResult` with `ok=false` and every violation otherwise.
pub fn validate_against_schema(schema: &Value, value: &Value) -> ValidationResult {
    let mut result = ValidationResult::default();
    validate_node(schema, value, None, &mut result);
    result
}

/// Returns the schema type name of a JSON value.
///
/// Numbers without a fractional part are reported as `integer`.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) if is_integer(value) => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().map(|f| f.fract() == 0.0).unwrap_or(false)
        }
        _ => false,
    }
}

fn type_matches(expected: &str, value: &Value) -> bool {
    match expected {
        "integer" => is_integer(value),
        "number" => value.is_number(),
        other => json_type_name(value) == other,
    }
}

fn validate_node(schema: &Value, value: &Value, path: Option<&str>, result: &mut ValidationResult) {
    if !validate_type(schema, value, path, result) {
        return;
    }

    if let Value::Number(n) = value {
        if let Some(f) = n.as_f64() {
            validate_bounds(schema, f, path, result);
        }
    }

    if let Value::Object(obj) = value {
        validate_object(schema, obj, path, result);
    }
}

/// Checks the `type` keyword. Returns false when the value has the wrong
/// type, in which case nested keywords are not checked.
fn validate_type(
    schema: &Value,
    value: &Value,
    path: Option<&str>,
    result: &mut ValidationResult,
) -> bool {
    let expected: Vec<&str> = match schema.get("type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).collect(),
        _ => return true,
    };

    if expected.iter().any(|t| type_matches(t, value)) {
        return true;
    }

    result.add_error(error_at(
        ErrorCode::TypeMismatch,
        format!(
            "expected {}, got {}",
            expected.join(" or "),
            json_type_name(value)
        ),
        path,
    ));
    false
}

fn validate_bounds(schema: &Value, n: f64, path: Option<&str>, result: &mut ValidationResult) {
    if let Some(min) = schema.get("minimum").and_then(Value::as_f64) {
        if n < min {
            result.add_error(error_at(
                ErrorCode::BelowMinimum,
                format!("must be >= {}, got {}", min, n),
                path,
            ));
        }
    }
    if let Some(max) = schema.get("maximum").and_then(Value::as_f64) {
        if n > max {
            result.add_error(error_at(
                ErrorCode::AboveMaximum,
                format!("must be <= {}, got {}", max, n),
                path,
            ));
        }
    }
}

fn validate_object(
    schema: &Value,
    obj: &Map<String, Value>,
    path: Option<&str>,
    result: &mut ValidationResult,
) {
    let properties = schema.get("properties").and_then(Value::as_object);

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if !obj.contains_key(name) {
                result.add_error(error_at(
                    ErrorCode::MissingProperty,
                    format!("missing required property '{}'", name),
                    Some(&join_path(path, name)),
                ));
            }
        }
    }

    let closed = matches!(schema.get("additionalProperties"), Some(Value::Bool(false)));

    for (name, child) in obj {
        let child_path = join_path(path, name);
        match properties.and_then(|p| p.get(name)) {
            Some(child_schema) => validate_node(child_schema, child, Some(&child_path), result),
            None if closed => result.add_error(error_at(
                ErrorCode::UnknownProperty,
                format!("property '{}' is not allowed", name),
                Some(&child_path),
            )),
            None => {}
        }
    }
}

fn join_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(p) => format!("{}.{}", p, name),
        None => name.to_string(),
    }
}

fn error_at(code: ErrorCode, message: String, path: Option<&str>) -> ValidationError {
    match path {
        Some(p) => ValidationError::with_path(code, message, p),
        None => ValidationError::new(code, message),
    }
}
