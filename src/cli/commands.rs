//! Command implementations for the Orthos CLI.

use std::path::Path;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{OrthosError, Result};
use crate::spelling::SpellChecker;

/// Execute a CLI command.
pub fn execute_command(args: OrthosArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_word(check_args.clone(), &args),
        Command::Complete(complete_args) => complete_prefix(complete_args.clone(), &args),
        Command::Correct(correct_args) => correct_word(correct_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
    }
}

/// Check a word against the dictionary.
fn check_word(args: CheckArgs, cli_args: &OrthosArgs) -> Result<()> {
    let word = normalize_token(&args.word)?;
    let checker = load_checker(&args.dictionary, cli_args)?;

    let outcome = CheckOutcome {
        correct: checker.check(&word),
        word,
    };
    output_check(&outcome, cli_args)
}

/// List one-letter completions of a prefix.
fn complete_prefix(args: CompleteArgs, cli_args: &OrthosArgs) -> Result<()> {
    let prefix = normalize_token(&args.prefix)?;
    let checker = load_checker(&args.dictionary, cli_args)?;

    let list = SuggestionList {
        suggestions: checker.completions(&prefix),
        word: prefix,
    };
    output_suggestions(&list, cli_args)
}

/// List corrections of the last character of a word.
fn correct_word(args: CorrectArgs, cli_args: &OrthosArgs) -> Result<()> {
    let word = normalize_token(&args.word)?;
    let checker = load_checker(&args.dictionary, cli_args)?;

    let list = SuggestionList {
        suggestions: checker.end_corrections(&word)?,
        word,
    };
    output_suggestions(&list, cli_args)
}

/// List every dictionary word one edit away from a word.
fn suggest_word(args: SuggestArgs, cli_args: &OrthosArgs) -> Result<()> {
    let word = normalize_token(&args.word)?;
    let checker = load_checker(&args.dictionary, cli_args)?;

    let list = SuggestionList {
        suggestions: checker.corrections(&word)?,
        word,
    };
    output_suggestions(&list, cli_args)
}

/// Normalize a query token, rejecting anything outside the ASCII alphabet.
fn normalize_token(token: &str) -> Result<String> {
    if token.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(token.to_lowercase())
    } else {
        Err(OrthosError::invalid_argument(format!(
            "'{token}' contains characters outside a-z"
        )))
    }
}

/// Load the word list and build the checker.
fn load_checker(path: &Path, cli_args: &OrthosArgs) -> Result<SpellChecker> {
    if cli_args.verbosity() > 1 {
        println!("Loading word list from: {}", path.display());
    }

    let checker = SpellChecker::from_word_list(path)?;

    if cli_args.verbosity() > 1 {
        println!("Dictionary holds {} words", checker.word_count());
    }

    Ok(checker)
}
