// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use luhnmod::{Luhn, LuhnConfig};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands, EngineArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", display::error_prefix(), e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config file first, then flags on top.
fn resolve_config(args: &EngineArgs) -> Result<LuhnConfig> {
    let mut config = match &args.config {
        Some(path) => LuhnConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LuhnConfig::default(),
    };
    if let Some(alphabet) = &args.alphabet {
        config.alphabet = Some(alphabet.clone());
    }
    if let Some(case_sensitive) = args.case_override() {
        config.case_sensitive = case_sensitive;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = resolve_config(&cli.engine)?;
    let match_case = cli.engine.match_case;
    let luhn = Luhn::checked(config).context("unusable alphabet")?;
    tracing::debug!(
        alphabet = %luhn.alphabet(),
        case_sensitive = luhn.is_case_sensitive(),
        "engine ready"
    );

    match cli.command {
        Commands::Generate {
            input,
            check_only,
            json,
        } => {
            let result = luhn.generate(&input, match_case)?;
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else if check_only {
                println!("{}", result.checksum);
            } else {
                println!("{}", display::signed(&result.phrase, result.checksum));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { input, json } => {
            let result = luhn.validate(&input, match_case)?;
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", display::verdict(result.is_valid));
            }
            Ok(if result.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Alphabet => {
            let alphabet = luhn.alphabet();
            println!("{}", alphabet);
            println!(
                "{}",
                display::paint("", &[display::DIM], &format!("{} symbols", alphabet.len()))
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
