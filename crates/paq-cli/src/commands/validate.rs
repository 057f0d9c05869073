//! Validate command implementation
//!
//! Checks parameters against the schema without generating anything.

use anyhow::Result;
use colored::Colorize;
use paq_spec::{validate_params, ValidationError, ValidationResult};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    load_error_to_json, print_json, validation_error_to_json, ValidateOutput,
};
use crate::input::{load_params, LoadResult, ParamsSource};

/// Run the validate command
///
/// # Arguments
/// * `source` - Where to read the parameters from
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(source: &ParamsSource, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(source)
    } else {
        run_human(source)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(source: &ParamsSource) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), source.describe());

    let LoadResult { value, source_hash } = load_params(source)?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let result = validate_params(&value);
    let duration_ms = start.elapsed().as_millis();

    print_validation_errors(&result.errors);

    if result.is_ok() {
        println!(
            "\n{} Parameters are valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Parameters have {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(source: &ParamsSource) -> Result<ExitCode> {
    let LoadResult { value, source_hash } = match load_params(source) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&ValidateOutput::failure(vec![load_error_to_json(&e)], None))?;
            return Ok(ExitCode::from(1));
        }
    };

    let output = validate_output(&validate_params(&value), source_hash);
    print_json(&output)?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn validate_output(result: &ValidationResult, source_hash: String) -> ValidateOutput {
    if result.is_ok() {
        ValidateOutput::success(source_hash)
    } else {
        ValidateOutput::failure(
            result.errors.iter().map(validation_error_to_json).collect(),
            Some(source_hash),
        )
    }
}

/// Prints validation errors, one per line.
pub(crate) fn print_validation_errors(errors: &[ValidationError]) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "Errors:".red().bold());
    for error in errors {
        let location = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code,
            location.dimmed(),
            error.message
        );
    }
}
