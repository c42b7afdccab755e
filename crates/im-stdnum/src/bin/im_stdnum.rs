//! # im-stdnum CLI entry point
//!
//! Validates, normalizes and reformats identifier numbers from the command
//! line. Kinds are named the way the registry names them (`es.dni`, `iban`).
//!
//! Exit codes: 0 on success, 1 when the number is invalid, 2 for an unknown
//! kind or a bad configuration file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use im_stdnum::{harness, ConfigError, Identifier, Registry, RegistryError, StdnumConfig};

/// Validate and format standard numbers
#[derive(Parser, Debug)]
#[command(name = "im-stdnum", version, about, long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to a TOML or JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a number and print its canonical form
    Validate { kind: String, number: String },

    /// Print the compact form of a number
    Compact { kind: String, number: String },

    /// Print the presentation form of a number
    Format { kind: String, number: String },

    /// Calculate the check digit(s) for a payload
    CheckDigit { kind: String, payload: String },

    /// List every kind that accepts a number
    Identify { number: String },

    /// List registered kinds
    List {
        /// Only kinds issued by this country (ISO 3166 alpha-2)
        #[arg(long)]
        country: Option<String>,
    },

    /// Run the worked examples of every kind
    SelfTest,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Identifier kind '{0}' has no check digit")]
    NoCheckDigit(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let registry = match &cli.config {
        Some(path) => Registry::with_config(&load_config(path)?)?,
        None => Registry::new(),
    };

    match &cli.command {
        Commands::Validate { kind, number } => {
            let kind = registry.get(kind)?;
            let result = kind.validate(number);
            if cli.json {
                let value = match &result {
                    Ok(valid) => json!({
                        "kind": kind.info().name,
                        "valid": true,
                        "number": valid,
                    }),
                    Err(e) => json!({
                        "kind": kind.info().name,
                        "valid": false,
                        "error": e.code(),
                        "message": e.to_string(),
                    }),
                };
                println!("{}", value);
            } else {
                match &result {
                    Ok(valid) => println!("{}", valid),
                    Err(e) => println!("{}", e),
                }
            }
            Ok(if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Compact { kind, number } => {
            let kind = registry.get(kind)?;
            print_value(cli.json, kind, &kind.compact(number));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Format { kind, number } => {
            let kind = registry.get(kind)?;
            print_value(cli.json, kind, &kind.format(number));
            Ok(ExitCode::SUCCESS)
        }
        Commands::CheckDigit { kind: name, payload } => {
            let kind = registry.get(name)?;
            let engine = kind
                .check_digit()
                .ok_or_else(|| CliError::NoCheckDigit(name.clone()))?;
            match engine.calc_check_digit(payload) {
                Ok(check) => {
                    print_value(cli.json, kind, &check);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    if cli.json {
                        println!("{}", json!({ "kind": kind.info().name, "error": e.code() }));
                    } else {
                        println!("{}", e);
                    }
                    Ok(ExitCode::from(1))
                }
            }
        }
        Commands::Identify { number } => {
            let names = registry.identify(number);
            if cli.json {
                println!("{}", json!(names));
            } else {
                for name in &names {
                    println!("{}", name);
                }
            }
            Ok(if names.is_empty() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::List { country } => {
            let infos: Vec<_> = match country {
                Some(country) => {
                    registry.list_kinds(country)?;
                    registry
                        .iter()
                        .map(|kind| *kind.info())
                        .filter(|info| {
                            info.country
                                .is_some_and(|c| c.eq_ignore_ascii_case(country))
                        })
                        .collect()
                }
                None => registry.iter().map(|kind| *kind.info()).collect(),
            };
            if cli.json {
                println!("{}", json!(infos));
            } else {
                for info in &infos {
                    println!("{:<20} {}", info.name, info.title);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::SelfTest => {
            let report = harness::run(&registry);
            if cli.json {
                println!("{}", json!(report));
            } else {
                for failure in &report.failures {
                    println!("{} {:?}: {}", failure.kind, failure.input, failure.problem);
                }
                println!(
                    "{} kinds, {} examples, {} failures",
                    report.kinds,
                    report.examples,
                    report.failures.len()
                );
            }
            Ok(if report.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}

fn print_value(as_json: bool, kind: &dyn Identifier, value: &str) {
    if as_json {
        println!("{}", json!({ "kind": kind.info().name, "value": value }));
    } else {
        println!("{}", value);
    }
}

fn load_config(path: &Path) -> Result<StdnumConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => StdnumConfig::from_json(&text)?,
        _ => StdnumConfig::from_toml(&text)?,
    };
    tracing::debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["im-stdnum", "validate", "es.dni", "54362315K"]).unwrap();
        assert!(!cli.json);
        assert!(matches!(cli.command, Commands::Validate { ref kind, .. } if kind == "es.dni"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["im-stdnum", "list", "--country", "ES", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::List { country: Some(ref c) } if c == "ES"));
    }

    #[test]
    fn test_parse_check_digit() {
        let cli = Cli::try_parse_from(["im-stdnum", "check-digit", "luhn", "7894"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckDigit { .. }));
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let cli = Cli::try_parse_from(["im-stdnum", "compact", "xx.nope", "1"]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::Registry(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::try_parse_from([
            "im-stdnum",
            "--config",
            "/nonexistent/im-stdnum.toml",
            "list",
        ])
        .unwrap();
        assert!(matches!(run(&cli), Err(CliError::Read { .. })));
    }
}
