//! paq CLI - validate parameters and generate addition questions
//!
//! Runs the same code path a host platform uses: schema validation, then
//! deterministic generation from a seed.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use paq_cli::commands;
use paq_cli::input::ParamsSource;
use paq_cli::logging;

/// paq - Parameterized Addition Questions
#[derive(Parser)]
#[command(name = "paq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parameter schema as JSON
    Schema {
        /// Pretty-print the schema
        #[arg(long)]
        pretty: bool,
    },

    /// Validate parameters against the schema
    Validate {
        /// Parameters as inline JSON
        #[arg(short, long, conflicts_with = "file")]
        params: Option<String>,

        /// Path to a JSON parameters file
        #[arg(short, long)]
        file: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate questions from parameters
    Generate {
        /// Parameters as inline JSON
        #[arg(short, long, conflicts_with = "file")]
        params: Option<String>,

        /// Path to a JSON parameters file
        #[arg(short, long)]
        file: Option<String>,

        /// Seed of the first question
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Number of questions, using consecutive seeds
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", colored::Colorize::red("error"), e);
        return ExitCode::from(1);
    }

    let result = match cli.command {
        Commands::Schema { pretty } => commands::schema::run(pretty),
        Commands::Validate { params, file, json } => {
            ParamsSource::from_args(params, file)
                .and_then(|source| commands::validate::run(&source, json))
        }
        Commands::Generate {
            params,
            file,
            seed,
            count,
            json,
        } => ParamsSource::from_args(params, file)
            .and_then(|source| commands::generate::run(&source, seed, count, json)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_schema() {
        let cli = Cli::try_parse_from(["paq", "schema", "--pretty"]).unwrap();
        match cli.command {
            Commands::Schema { pretty } => assert!(pretty),
            _ => panic!("expected schema command"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from(["paq", "validate", "--params", r#"{"max": 10}"#]).unwrap();
        match cli.command {
            Commands::Validate { params, file, json } => {
                assert_eq!(params.as_deref(), Some(r#"{"max": 10}"#));
                assert!(file.is_none());
                assert!(!json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_validate_with_file_and_json() {
        let cli = Cli::try_parse_from(["paq", "validate", "--file", "params.json", "--json"])
            .unwrap();
        match cli.command {
            Commands::Validate { params, file, json } => {
                assert!(params.is_none());
                assert_eq!(file.as_deref(), Some("params.json"));
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_rejects_params_and_file_together() {
        let result = Cli::try_parse_from([
            "paq",
            "validate",
            "--params",
            "{}",
            "--file",
            "params.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["paq", "generate", "-p", r#"{"max": 5}"#]).unwrap();
        match cli.command {
            Commands::Generate {
                seed, count, json, ..
            } => {
                assert_eq!(seed, 0);
                assert_eq!(count, 1);
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_with_seed_and_count() {
        let cli = Cli::try_parse_from([
            "paq",
            "-vv",
            "generate",
            "--file",
            "params.json",
            "--seed",
            "4294967295",
            "-n",
            "3",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate {
                file,
                seed,
                count,
                json,
                ..
            } => {
                assert_eq!(file.as_deref(), Some("params.json"));
                assert_eq!(seed, u32::MAX);
                assert_eq!(count, 3);
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["paq", "schema", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cli_rejects_negative_seed() {
        assert!(Cli::try_parse_from(["paq", "generate", "-p", "{}", "--seed", "-1"]).is_err());
    }
}
