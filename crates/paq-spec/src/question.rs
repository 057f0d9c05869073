//! Question types produced by generators.
//!
//! A question always has a title and prompt. Its format is a tagged enum so a
//! free-response question can never carry choices and a multiple-choice
//! answer is always an index.
//!
//! The JSON form is flat:
//!
//! ```json
//! {"title": "Integer Addition", "question": "What is 3 + 9?", "format": "free-response", "answer": "12"}
//! ```

use serde::{Deserialize, Serialize};

/// A generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Short human-readable title describing the question type.
    pub title: String,
    /// Prompt shown to the student.
    pub question: String,
    /// Format and answer.
    #[serde(flatten)]
    pub format: QuestionFormat,
}

/// Answer shape of a question, tagged by `format`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "kebab-case")]
pub enum QuestionFormat {
    /// The student types the answer.
    FreeResponse {
        /// Text of the correct answer.
        answer: String,
    },
    /// The student picks one of `choices`.
    MultipleChoice {
        /// Choices in display order.
        choices: Vec<String>,
        /// 0-based index of the correct choice.
        answer: usize,
    },
}

impl QuestionFormat {
    /// Returns the wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionFormat::FreeResponse { .. } => "free-response",
            QuestionFormat::MultipleChoice { .. } => "multiple-choice",
        }
    }
}

impl std::fmt::Display for QuestionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Question {
    /// Creates a free-response question.
    pub fn free_response(
        title: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            format: QuestionFormat::FreeResponse {
                answer: answer.into(),
            },
        }
    }

    /// Creates a multiple-choice question.
    pub fn multiple_choice(
        title: impl Into<String>,
        question: impl Into<String>,
        choices: Vec<String>,
        answer: usize,
    ) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            format: QuestionFormat::MultipleChoice { choices, answer },
        }
    }

    /// Returns the text of the correct answer, whatever the format.
    ///
    /// Returns `None` only for a multiple-choice question whose index is out
    /// of range.
    pub fn correct_answer(&self) -> Option<&str> {
        match &self.format {
            QuestionFormat::FreeResponse { answer } => Some(answer),
            QuestionFormat::MultipleChoice { choices, answer } => {
                choices.get(*answer).map(String::as_str)
            }
        }
    }

    /// Returns the choices, if any.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.format {
            QuestionFormat::FreeResponse { .. } => None,
            QuestionFormat::MultipleChoice { choices, .. } => Some(choices),
        }
    }

    /// Parses a question from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the question to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the question to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
