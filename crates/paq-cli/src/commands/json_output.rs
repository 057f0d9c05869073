//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `validate` and `generate`.

use paq_spec::{BackendError, Question, ValidationError};
use serde::{Deserialize, Serialize};

use crate::input::LoadError;

/// Error codes for CLI operations.
///
/// Validation errors pass through their own `E00x` codes; backend errors pass
/// through their `ADDITION_00x` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Invalid `--count`
    pub const INVALID_COUNT: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002", "ADDITION_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Seed of the failed generation (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            seed: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the seed for this error.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Converts a schema validation error.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    let json = JsonError::new(error.code.code(), error.message.clone());
    match &error.path {
        Some(path) => json.with_path(path.clone()),
        None => json,
    }
}

/// Converts a parameter loading error.
pub fn load_error_to_json(error: &LoadError) -> JsonError {
    let code = match error {
        LoadError::Read(_) => error_codes::FILE_READ,
        LoadError::Parse(_) => error_codes::JSON_PARSE,
    };
    JsonError::new(code, error.to_string())
}

/// Converts a backend error raised while generating for `seed`.
pub fn backend_error_to_json<E: BackendError>(error: &E, seed: u32) -> JsonError {
    JsonError::new(error.code(), error.message()).with_seed(seed)
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the parameters are valid
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// BLAKE3 hash of the parameter source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl ValidateOutput {
    /// Creates a successful validate output.
    pub fn success(source_hash: String) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed validate output.
    pub fn failure(errors: Vec<JsonError>, source_hash: Option<String>) -> Self {
        Self {
            success: false,
            errors,
            source_hash,
        }
    }
}

/// One generated question in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    /// Seed the question was generated with
    pub seed: u32,
    /// Canonical BLAKE3 hash of the question
    pub question_hash: String,
    /// The question itself
    pub question: Question,
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether every requested question was generated
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Generated questions, in seed order
    pub questions: Vec<GeneratedQuestion>,
    /// Canonical hash of the validated parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hash: Option<String>,
}

impl GenerateOutput {
    /// Creates a failed generate output with no questions.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            questions: Vec::new(),
            params_hash: None,
        }
    }
}

/// Prints any serializable output as pretty JSON on stdout.
pub fn print_json<T: Serialize>(output: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}
