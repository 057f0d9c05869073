//! Generate command implementation
//!
//! Validates parameters once, then generates one question per seed in
//! `seed, seed + 1, ...` (wrapping at `u32::MAX`).

use anyhow::Result;
use colored::Colorize;
use paq_backend_addition::generate_with_seed;
use paq_spec::{
    canonical_params_hash, canonical_question_hash, AdditionParams, BackendError, Question,
    QuestionFormat, SpecError, QUESTION_TYPE,
};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    backend_error_to_json, error_codes, load_error_to_json, print_json, validation_error_to_json,
    GenerateOutput, GeneratedQuestion, JsonError,
};
use super::validate::print_validation_errors;
use crate::input::{load_params, ParamsSource};

/// Exit code when the parameters are invalid.
const EXIT_INVALID: u8 = 1;

/// Exit code when a generation fails after the parameters validated.
const EXIT_GENERATION_FAILED: u8 = 2;

/// Outcome of generating a batch of questions.
#[derive(Debug, Default)]
pub struct Batch {
    /// Successfully generated questions, in seed order
    pub questions: Vec<GeneratedQuestion>,
    /// Per-seed generation failures
    pub failures: Vec<JsonError>,
}

impl Batch {
    /// Whether every seed produced a question.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Seeds covered by a run starting at `seed`.
pub fn seeds(seed: u32, count: u32) -> impl Iterator<Item = u32> {
    (0..count).map(move |i| seed.wrapping_add(i))
}

/// Generates one question per seed.
///
/// Failures are recorded and the remaining seeds still run.
pub fn generate_batch(params: &AdditionParams, seed: u32, count: u32) -> Result<Batch> {
    let mut batch = Batch::default();

    for seed in seeds(seed, count) {
        match generate_with_seed(params, seed) {
            Ok(question) => {
                let question_hash = canonical_question_hash(&question)?;
                tracing::debug!(seed, hash = %&question_hash[..16], "generated question");
                batch.questions.push(GeneratedQuestion {
                    seed,
                    question_hash,
                    question,
                });
            }
            Err(e) => {
                tracing::warn!(seed, code = e.code(), error = %e, "generation failed");
                batch.failures.push(backend_error_to_json(&e, seed));
            }
        }
    }

    Ok(batch)
}

/// Run the generate command
///
/// # Arguments
/// * `source` - Where to read the parameters from
/// * `seed` - First seed
/// * `count` - Number of questions (at least 1)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 for invalid parameters, 2 if any generation failed
pub fn run(source: &ParamsSource, seed: u32, count: u32, json_output: bool) -> Result<ExitCode> {
    if count == 0 {
        if json_output {
            print_json(&GenerateOutput::failure(vec![JsonError::new(
                error_codes::INVALID_COUNT,
                "--count must be at least 1",
            )]))?;
            return Ok(ExitCode::from(EXIT_INVALID));
        }
        anyhow::bail!("--count must be at least 1");
    }

    if json_output {
        run_json(source, seed, count)
    } else {
        run_human(source, seed, count)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(source: &ParamsSource, seed: u32, count: u32) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating:".cyan().bold(), source.describe());
    println!("{} {}", "Question type:".dimmed(), QUESTION_TYPE);
    println!("{} {}", "Seed:".dimmed(), seed);
    if count > 1 {
        println!("{} {}", "Count:".dimmed(), count);
    }

    let loaded = load_params(source)?;
    let params = match AdditionParams::from_value(loaded.value) {
        Ok(params) => params,
        Err(SpecError::ValidationFailed(errors)) => {
            print_validation_errors(&errors);
            println!(
                "\n{} Parameters have {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            return Ok(ExitCode::from(EXIT_INVALID));
        }
        Err(e) => return Err(e.into()),
    };
    println!(
        "{} {}",
        "Params hash:".dimmed(),
        &canonical_params_hash(&params)?[..16]
    );

    let batch = generate_batch(&params, seed, count)?;
    let duration_ms = start.elapsed().as_millis();

    for generated in &batch.questions {
        print_question(generated);
    }

    if batch.is_complete() {
        println!(
            "\n{} Generated {} question(s) ({}ms)",
            "SUCCESS".green().bold(),
            batch.questions.len(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n{}", "Errors:".red().bold());
        for failure in &batch.failures {
            println!(
                "  {} [{}] seed {}: {}",
                "x".red(),
                failure.code,
                failure.seed.unwrap_or(seed),
                failure.message
            );
        }
        println!(
            "\n{} {} of {} generation(s) failed ({}ms)",
            "FAILED".red().bold(),
            batch.failures.len(),
            count,
            duration_ms
        );
        Ok(ExitCode::from(EXIT_GENERATION_FAILED))
    }
}

/// Run generate with machine-readable JSON output
fn run_json(source: &ParamsSource, seed: u32, count: u32) -> Result<ExitCode> {
    let loaded = match load_params(source) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&GenerateOutput::failure(vec![load_error_to_json(&e)]))?;
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    let params = match AdditionParams::from_value(loaded.value) {
        Ok(params) => params,
        Err(SpecError::ValidationFailed(errors)) => {
            let errors = errors.iter().map(validation_error_to_json).collect();
            print_json(&GenerateOutput::failure(errors))?;
            return Ok(ExitCode::from(EXIT_INVALID));
        }
        Err(e) => {
            let error = JsonError::new(error_codes::JSON_PARSE, e.to_string());
            print_json(&GenerateOutput::failure(vec![error]))?;
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    let batch = generate_batch(&params, seed, count)?;
    let success = batch.is_complete();
    let output = GenerateOutput {
        success,
        errors: batch.failures,
        questions: batch.questions,
        params_hash: Some(canonical_params_hash(&params)?),
    };
    print_json(&output)?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_GENERATION_FAILED)
    })
}

fn print_question(generated: &GeneratedQuestion) {
    let Question {
        question, format, ..
    } = &generated.question;

    println!(
        "\n{} {}",
        format!("[seed {}]", generated.seed).dimmed(),
        question.bold()
    );
    match format {
        QuestionFormat::FreeResponse { answer } => {
            println!("  {} {}", "answer:".dimmed(), answer.green());
        }
        QuestionFormat::MultipleChoice { choices, answer } => {
            for (i, choice) in choices.iter().enumerate() {
                if i == *answer {
                    println!("  {} {}", format!("{})", i).green(), choice.green());
                } else {
                    println!("  {}) {}", i, choice);
                }
            }
        }
    }
    println!(
        "  {} {}",
        "hash:".dimmed(),
        &generated.question_hash[..16]
    );
}
