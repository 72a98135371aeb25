//! Command line argument parsing for the Orthos CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Orthos - a trie-backed spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "orthos")]
#[command(about = "A trie-backed spell checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrthosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrthosArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether a word is in the dictionary
    Check(CheckArgs),

    /// List dictionary words one letter longer than a prefix
    Complete(CompleteArgs),

    /// List dictionary words reachable by editing the last character
    Correct(CorrectArgs),

    /// List dictionary words reachable by any single-character edit
    Suggest(SuggestArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Path to the word list file (one word per line)
    #[arg(short, long, value_name = "FILE", default_value = "words_alpha.txt")]
    pub dictionary: PathBuf,
}

/// Arguments for the complete command
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Path to the word list file (one word per line)
    #[arg(short, long, value_name = "FILE", default_value = "words_alpha.txt")]
    pub dictionary: PathBuf,
}

/// Arguments for the correct command
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Path to the word list file (one word per line)
    #[arg(short, long, value_name = "FILE", default_value = "words_alpha.txt")]
    pub dictionary: PathBuf,
}

/// Arguments for the suggest command
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to suggest single-character edits for
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Path to the word list file (one word per line)
    #[arg(short, long, value_name = "FILE", default_value = "words_alpha.txt")]
    pub dictionary: PathBuf,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
