//! PAQ Question Module Contracts
//!
//! This crate provides the shared contracts for PAQ question generators:
//! the declarative parameter schema, a schema interpreter for validating
//! parameters, the question types a generator returns, the labelled
//! [`DrawSource`] every random decision goes through, and canonical hashing
//! for pinning outputs.
//!
//! # Example
//!
//! ```
//! use paq_spec::{validate_params, AdditionParams};
//! use serde_json::json;
//!
//! let raw = json!({"max": 10, "mc": true});
//! assert!(validate_params(&raw).is_ok());
//!
//! let params = AdditionParams::from_value(raw).unwrap();
//! assert_eq!(params.max, 10);
//! assert!(params.is_multiple_choice());
//! ```
//!
//! # Modules
//!
//! - [`draw`]: The labelled draw source trait
//! - [`error`]: Validation errors, `SpecError` and the `BackendError` trait
//! - [`hash`]: Canonical hashing and draw seed derivation
//! - [`params`]: Addition parameters and their schema
//! - [`question`]: Question types
//! - [`validation`]: Schema interpreter

pub mod draw;
pub mod error;
pub mod hash;
pub mod params;
pub mod question;
pub mod validation;

pub use draw::DrawSource;
pub use error::{BackendError, ErrorCode, SpecError, ValidationError, ValidationResult};
pub use hash::{canonical_params_hash, canonical_question_hash, derive_draw_seed};
pub use params::{params_schema, AdditionParams, MAX_MAX, MIN_MAX, QUESTION_TYPE};
pub use question::{Question, QuestionFormat};
pub use validation::{validate_against_schema, validate_params};
