//! Schema command implementation
//!
//! Prints the parameter schema a host platform validates against.

use anyhow::Result;
use paq_spec::params_schema;
use std::process::ExitCode;

/// Run the schema command
///
/// # Arguments
/// * `pretty` - Pretty-print the schema JSON
pub fn run(pretty: bool) -> Result<ExitCode> {
    println!("{}", render(pretty)?);
    Ok(ExitCode::SUCCESS)
}

/// Renders the schema as a JSON string.
pub fn render(pretty: bool) -> Result<String> {
    let schema = params_schema();
    let json = if pretty {
        serde_json::to_string_pretty(&schema)?
    } else {
        serde_json::to_string(&schema)?
    };
    Ok(json)
}
