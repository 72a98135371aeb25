//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OrthosArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a dictionary lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub word: String,
    pub correct: bool,
}

/// Result structure for completion and correction queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionList {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Output a lookup result in the selected format.
pub fn output_check(outcome: &CheckOutcome, args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", if outcome.correct { "correct" } else { "incorrect" });
            Ok(())
        }
        OutputFormat::Json => output_json(outcome, args),
    }
}

/// Output a suggestion list in the selected format, one word per line.
pub fn output_suggestions(list: &SuggestionList, args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for suggestion in &list.suggestions {
                println!("{suggestion}");
            }
            Ok(())
        }
        OutputFormat::Json => output_json(list, args),
    }
}

/// Output any serializable result as JSON.
fn output_json<T: Serialize>(result: &T, args: &OrthosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
