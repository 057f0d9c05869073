//! Integer addition question generation.

use paq_spec::{AdditionParams, DrawSource, Question};
use tracing::{debug, trace};

use crate::error::{AdditionResult, GenerateError};
use crate::rng::SeededDraws;

/// Title of every generated question.
pub const TITLE: &str = "Integer Addition";

/// Label of the left addend draw.
pub const LEFT_ADDEND_LABEL: &str = "left addend";

/// Label of the right addend draw.
pub const RIGHT_ADDEND_LABEL: &str = "right addend";

/// Label of the multiple-choice ordering shuffle.
pub const ORDERING_LABEL: &str = "ordering";

/// Fixed incorrect choices offered alongside the answer.
///
/// They are not numerals, so they can never collide with a sum.
pub const DISTRACTORS: [&str; 2] = ["wrong", "not this"];

/// Generates one addition question.
///
/// Draws the left addend, then the right addend, each in `[0, params.max)`.
/// When `params.mc` is true the answer and the distractors are shuffled under
/// [`ORDERING_LABEL`] and the answer becomes the index of the sum; otherwise
/// `shuffle` is never called.
///
/// `params` is expected to have passed [`validate_params`]. A `max` of 0 is
/// handed to the draw source as-is.
///
/// # Errors
///
/// Only two variants are returned here:
/// - [`GenerateError::Draw`] carries the source's error unchanged
/// - [`GenerateError::AnswerNotInChoices`] when `shuffle` does not return a
///   permutation
///
/// [`GenerateError::InvalidParams`] comes from [`generate_from_value`] only.
///
/// [`validate_params`]: paq_spec::validate_params
///
/// # Example
/// ```
/// use paq_backend_addition::{generate, SeededDraws};
/// use paq_spec::AdditionParams;
///
/// let question = generate(&AdditionParams::new(10), &mut SeededDraws::new(42)).unwrap();
/// assert_eq!(question.title, "Integer Addition");
/// ```
pub fn generate<D: DrawSource>(
    params: &AdditionParams,
    draws: &mut D,
) -> Result<Question, GenerateError<D::Error>> {
    let left = draws
        .integer(LEFT_ADDEND_LABEL, params.max)
        .map_err(GenerateError::Draw)?;
    let right = draws
        .integer(RIGHT_ADDEND_LABEL, params.max)
        .map_err(GenerateError::Draw)?;
    debug!(left, right, max = params.max, "drew addends");

    let prompt = format!("What is {} + {}?", left, right);
    let answer = (u64::from(left) + u64::from(right)).to_string();

    let question = if params.is_multiple_choice() {
        let mut candidates = Vec::with_capacity(1 + DISTRACTORS.len());
        candidates.push(answer.clone());
        candidates.extend(DISTRACTORS.iter().map(|d| d.to_string()));

        let choices = draws
            .shuffle(ORDERING_LABEL, candidates)
            .map_err(GenerateError::Draw)?;
        let position = choices.iter().position(|c| *c == answer);
        let index = match position {
            Some(index) => index,
            None => {
                return Err(GenerateError::AnswerNotInChoices {
                    label: ORDERING_LABEL.to_string(),
                    answer,
                    choices,
                })
            }
        };
        debug!(?choices, index, "ordered choices");
        Question::multiple_choice(TITLE, prompt, choices, index)
    } else {
        Question::free_response(TITLE, prompt, answer)
    };

    trace!(?question, "generated question");
    Ok(question)
}

/// Validates raw JSON parameters, then generates a question.
pub fn generate_from_value<D: DrawSource>(
    value: serde_json::Value,
    draws: &mut D,
) -> Result<Question, GenerateError<D::Error>> {
    let params = AdditionParams::from_value(value)?;
    generate(&params, draws)
}

/// Generates a question with a [`SeededDraws`] source for `seed`.
pub fn generate_with_seed(params: &AdditionParams, seed: u32) -> AdditionResult<Question> {
    generate(params, &mut SeededDraws::new(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawError;
    use paq_spec::{QuestionFormat, SpecError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_free_response_answer_is_sum() {
        let q = generate_with_seed(&AdditionParams::new(10), 42).unwrap();
        let QuestionFormat::FreeResponse { answer } = &q.format else {
            panic!("expected free-response, got {}", q.format);
        };

        let (left, right) = parse_prompt(&q.question);
        assert_eq!(answer, &(left + right).to_string());
    }

    #[test]
    fn test_multiple_choice_shape() {
        let q = generate_with_seed(&AdditionParams::new(10).multiple_choice(true), 42).unwrap();
        let choices = q.choices().expect("choices");
        assert_eq!(choices.len(), 3);
        assert!(choices.iter().any(|c| c == "wrong"));
        assert!(choices.iter().any(|c| c == "not this"));

        let (left, right) = parse_prompt(&q.question);
        assert_eq!(q.correct_answer(), Some((left + right).to_string().as_str()));
    }

    #[test]
    fn test_mc_false_is_free_response() {
        let q = generate_with_seed(&AdditionParams::new(10).multiple_choice(false), 3).unwrap();
        assert_eq!(q.format.as_str(), "free-response");
    }

    #[test]
    fn test_same_seed_same_question() {
        let params = AdditionParams::new(1000).multiple_choice(true);
        assert_eq!(
            generate_with_seed(&params, 11).unwrap(),
            generate_with_seed(&params, 11).unwrap()
        );
    }

    #[test]
    fn test_max_one_forces_zero() {
        for seed in 0..20 {
            let q = generate_with_seed(&AdditionParams::new(1), seed).unwrap();
            assert_eq!(q.question, "What is 0 + 0?");
            assert_eq!(q.correct_answer(), Some("0"));
        }
    }

    #[test]
    fn test_zero_max_surfaces_draw_error() {
        let err = generate_with_seed(&AdditionParams::new(0), 1).unwrap_err();
        assert_eq!(
            err.into_draw_error(),
            Some(DrawError::EmptyRange {
                label: LEFT_ADDEND_LABEL.into()
            })
        );
    }

    #[test]
    fn test_generate_does_not_revalidate() {
        // Above the schema maximum, but still a usable bound for the source.
        let q = generate_with_seed(&AdditionParams::new(5000), 4).unwrap();
        let (left, right) = parse_prompt(&q.question);
        assert!(left < 5000 && right < 5000);

        let err = generate_with_seed(&AdditionParams::new(0), 4).unwrap_err();
        assert!(matches!(err, GenerateError::Draw(_)));
    }

    #[test]
    fn test_generate_from_value() {
        let q = generate_from_value(json!({"max": 5, "mc": true}), &mut SeededDraws::new(8))
            .unwrap();
        assert_eq!(q.format.as_str(), "multiple-choice");

        let err = generate_from_value(json!({"max": 5, "bogus": 1}), &mut SeededDraws::new(8))
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::InvalidParams(SpecError::ValidationFailed(_))
        ));
    }

    fn parse_prompt(prompt: &str) -> (u64, u64) {
        let body = prompt
            .strip_prefix("What is ")
            .and_then(|s| s.strip_suffix('?'))
            .expect("prompt format");
        let (l, r) = body.split_once(" + ").expect("plus sign");
        (l.parse().unwrap(), r.parse().unwrap())
    }
}
