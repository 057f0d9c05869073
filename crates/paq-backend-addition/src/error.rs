//! Error types for the addition backend.

use paq_spec::{BackendError, SpecError};
use thiserror::Error;

/// Result type for addition generation with the seeded draw source.
pub type AdditionResult<T> = Result<T, GenerateError<DrawError>>;

/// Errors raised by [`SeededDraws`](crate::rng::SeededDraws).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Draw labels name the decision being made and cannot be blank.
    #[error("draw label must not be empty")]
    EmptyLabel,

    /// An integer draw needs at least one candidate value.
    #[error("integer draw '{label}' has an empty range (bound 0)")]
    EmptyRange {
        /// Label of the failed draw.
        label: String,
    },
}

impl BackendError for DrawError {
    fn code(&self) -> &'static str {
        match self {
            DrawError::EmptyLabel => "ADDITION_001",
            DrawError::EmptyRange { .. } => "ADDITION_002",
        }
    }

    fn category(&self) -> &'static str {
        "addition"
    }
}

/// Errors that can occur while generating an addition question.
///
/// `E` is the draw source's error type. Draw failures are carried unchanged:
/// the variant is transparent for both `Display` and `source`.
#[derive(Debug, Error)]
pub enum GenerateError<E> {
    /// The draw source failed.
    #[error(transparent)]
    Draw(E),

    /// Raw parameters failed schema validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] SpecError),

    /// The shuffled choices lost the correct answer.
    #[error("shuffle '{label}' did not return the answer '{answer}' among {choices:?}")]
    AnswerNotInChoices {
        /// Label of the shuffle draw.
        label: String,
        /// Expected answer text.
        answer: String,
        /// Choices the draw source returned.
        choices: Vec<String>,
    },
}

impl<E> GenerateError<E> {
    /// Returns the draw source's error, if that is what failed.
    pub fn into_draw_error(self) -> Option<E> {
        match self {
            GenerateError::Draw(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> BackendError for GenerateError<E>
where
    E: BackendError + 'static,
{
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Draw(e) => e.code(),
            GenerateError::InvalidParams(_) => "ADDITION_003",
            GenerateError::AnswerNotInChoices { .. } => "ADDITION_004",
        }
    }

    fn category(&self) -> &'static str {
        "addition"
    }
}
