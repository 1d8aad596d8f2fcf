// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the luhnmod command-line interface.
//!
//! Three subcommands: `generate` to compute a check character, `validate` to
//! verify one, and `alphabet` to show which dictionary is in effect. The
//! alphabet and case sensitivity come from a JSON config file, flags, or the
//! built-in defaults, with flags taking precedence.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "luhnmod",
    about = "Luhn mod-N check characters over configurable alphabets",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options that select the checksum engine.
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// JSON config file: {"alphabet": "...", "caseSensitive": bool}
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Custom alphabet (must have an even number of unique characters)
    #[arg(long, global = true)]
    pub alphabet: Option<String>,

    /// Make the engine case sensitive (selects the 62-symbol default alphabet)
    #[arg(long, global = true, conflicts_with = "case_insensitive")]
    pub case_sensitive: bool,

    /// Make the engine case insensitive, overriding a config file
    #[arg(long, global = true)]
    pub case_insensitive: bool,

    /// Case sensitivity for this call only; the alphabet stays the engine's
    #[arg(long, global = true, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub match_case: Option<bool>,
}

impl EngineArgs {
    /// Engine default requested on the command line, if any.
    pub fn case_override(&self) -> Option<bool> {
        match (self.case_sensitive, self.case_insensitive) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the check character for INPUT
    Generate {
        /// Text to protect; characters outside the alphabet are dropped
        input: String,

        /// Print only the check character
        #[arg(long, conflicts_with = "json")]
        check_only: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Verify that the last character of INPUT is a valid check character
    ///
    /// Exits with status 0 when valid and 1 when invalid.
    Validate {
        /// Text including its trailing check character
        input: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the alphabet in effect and its size
    Alphabet,
}
