//! Loading raw parameter JSON from the command line or a file.
//!
//! Parameters are loaded as an untyped JSON value so schema validation can
//! report every problem, rather than stopping at the first serde error.

use anyhow::{Context, Result};
use paq_spec::hash::blake3_hash;
use std::path::{Path, PathBuf};

/// Where parameters come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsSource {
    /// JSON passed directly on the command line.
    Inline(String),
    /// A JSON file on disk.
    File(PathBuf),
}

impl ParamsSource {
    /// Builds a source from the mutually exclusive `--params` / `--file` flags.
    pub fn from_args(inline: Option<String>, file: Option<String>) -> Result<Self> {
        match (inline, file) {
            (Some(json), None) => Ok(ParamsSource::Inline(json)),
            (None, Some(path)) => Ok(ParamsSource::File(PathBuf::from(path))),
            (Some(_), Some(_)) => anyhow::bail!("pass either --params or --file, not both"),
            (None, None) => anyhow::bail!("missing parameters: pass --params <json> or --file <path>"),
        }
    }

    /// Short description for output headers.
    pub fn describe(&self) -> String {
        match self {
            ParamsSource::Inline(_) => "inline parameters".to_string(),
            ParamsSource::File(path) => path.display().to_string(),
        }
    }
}

/// Parameters loaded from a source.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The raw parameter value, not yet validated.
    pub value: serde_json::Value,
    /// BLAKE3 hash of the source text (hex string).
    pub source_hash: String,
}

/// Errors from loading parameters, kept apart so JSON output can assign codes.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Read(anyhow::Error),
    /// The text is not JSON.
    Parse(anyhow::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Read(e) | LoadError::Parse(e) => write!(f, "{:#}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Loads raw parameters from a source.
pub fn load_params(source: &ParamsSource) -> Result<LoadResult, LoadError> {
    let text = match source {
        ParamsSource::Inline(json) => json.clone(),
        ParamsSource::File(path) => read_file(path).map_err(LoadError::Read)?,
    };

    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {} as JSON", source.describe()))
        .map_err(LoadError::Parse)?;

    tracing::debug!(source = %source.describe(), "loaded parameters");

    Ok(LoadResult {
        value,
        source_hash: blake3_hash(text.as_bytes()),
    })
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read parameters file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_from_args() {
        assert_eq!(
            ParamsSource::from_args(Some("{}".into()), None).unwrap(),
            ParamsSource::Inline("{}".into())
        );
        assert_eq!(
            ParamsSource::from_args(None, Some("p.json".into())).unwrap(),
            ParamsSource::File(PathBuf::from("p.json"))
        );
        assert!(ParamsSource::from_args(Some("{}".into()), Some("p.json".into())).is_err());
        assert!(ParamsSource::from_args(None, None).is_err());
    }

    #[test]
    fn test_load_inline() {
        let result = load_params(&ParamsSource::Inline(r#"{"max": 10}"#.into())).unwrap();
        assert_eq!(result.value, json!({"max": 10}));
        assert_eq!(result.source_hash.len(), 64);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max": 20, "mc": true}}"#).unwrap();

        let result = load_params(&ParamsSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(result.value, json!({"max": 20, "mc": true}));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_params(&ParamsSource::File(PathBuf::from("/nonexistent/params.json")))
            .unwrap_err();
        assert!(matches!(err, LoadError::Read(_)));
        assert!(err.to_string().contains("failed to read parameters file"));
    }

    #[test]
    fn test_load_invalid_json() {
        let err = load_params(&ParamsSource::Inline("{max:".into())).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
