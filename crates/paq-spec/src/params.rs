//! Addition parameters and their declarative schema.
//!
//! The schema is the contract a host platform validates against before
//! calling the generator. [`AdditionParams`] is the typed form of a value
//! that passed validation.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;

use crate::error::SpecError;
use crate::validation::validate_params;

/// Identifier of this question module (the schema title).
pub const QUESTION_TYPE: &str = "addition-example";

/// Smallest accepted `max`.
pub const MIN_MAX: u32 = 1;

/// Largest accepted `max`.
pub const MAX_MAX: u32 = 1000;

/// Returns the declarative schema for addition parameters.
///
/// ```
/// use paq_spec::params::params_schema;
///
/// let schema = params_schema();
/// assert_eq!(schema["required"][0], "max");
/// assert_eq!(schema["additionalProperties"], false);
/// ```
pub fn params_schema() -> serde_json::Value {
    json!({
        "title": QUESTION_TYPE,
        "type": "object",
        "required": ["max"],
        "additionalProperties": false,
        "properties": {
            "max": {
                "type": "integer",
                "minimum": MIN_MAX,
                "maximum": MAX_MAX,
            },
            "mc": {
                "type": "boolean",
            },
        },
    })
}

/// Parameters for an integer addition question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdditionParams {
    /// Exclusive upper bound for each addend.
    #[serde(deserialize_with = "integral_u32")]
    pub max: u32,
    /// Produce a multiple-choice question instead of free-response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mc: Option<bool>,
}

impl AdditionParams {
    /// Creates free-response parameters.
    pub fn new(max: u32) -> Self {
        Self { max, mc: None }
    }

    /// Sets the multiple-choice flag.
    pub fn multiple_choice(mut self, mc: bool) -> Self {
        self.mc = Some(mc);
        self
    }

    /// Returns true if `mc` is present and true.
    pub fn is_multiple_choice(&self) -> bool {
        self.mc.unwrap_or(false)
    }

    /// Validates a raw JSON value against [`params_schema`] and converts it.
    ///
    /// All schema violations are reported together in
    /// [`SpecError::ValidationFailed`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, SpecError> {
        validate_params(&value)
            .into_result()
            .map_err(SpecError::ValidationFailed)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Parses and validates parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Serializes the parameters to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Accepts any JSON number without a fractional part, so `10.0` reads as 10
/// the same way the schema treats it.
fn integral_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = serde_json::Number::deserialize(deserializer)?;
    if let Some(u) = n.as_u64() {
        return u32::try_from(u).map_err(D::Error::custom);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) => Ok(f as u32),
        _ => Err(D::Error::custom(format!(
            "expected a non-negative integer, got {}",
            n
        ))),
    }
}
