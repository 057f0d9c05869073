//! PAQ Integer Addition Backend
//!
//! This crate implements the `addition-example` question module: given
//! validated [`AdditionParams`](paq_spec::AdditionParams) and a labelled
//! [`DrawSource`](paq_spec::DrawSource) it produces one free-response or
//! multiple-choice question asking for the sum of two integers.
//!
//! # Determinism
//!
//! Every random decision is a named draw (`"left addend"`, `"right addend"`,
//! `"ordering"`). With [`SeededDraws`] each label gets its own PCG32 stream
//! derived via BLAKE3, so the same seed always yields the same question.
//!
//! # Example
//!
//! ```
//! use paq_backend_addition::{generate, SeededDraws};
//! use paq_spec::{AdditionParams, QuestionFormat};
//!
//! let params = AdditionParams::new(10).multiple_choice(true);
//! let question = generate(&params, &mut SeededDraws::new(42)).unwrap();
//!
//! let QuestionFormat::MultipleChoice { choices, answer } = &question.format else {
//!     unreachable!()
//! };
//! assert_eq!(choices.len(), 3);
//! assert!(*answer < 3);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point
//! - [`rng`] - Seeded draw source
//! - [`error`] - Draw and generation errors

pub mod error;
pub mod generate;
pub mod rng;

pub use error::{AdditionResult, DrawError, GenerateError};
pub use generate::{
    generate, generate_from_value, generate_with_seed, DISTRACTORS, LEFT_ADDEND_LABEL,
    ORDERING_LABEL, RIGHT_ADDEND_LABEL, TITLE,
};
pub use rng::SeededDraws;
