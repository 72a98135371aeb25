//! Plain-text word list loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Result;

/// Load a word list from a text file with one word per line.
///
/// Lines are trimmed; blank lines and lines containing anything outside the
/// ASCII alphabet are skipped, and the surviving words are lowercased. An
/// empty result is not an error, just an empty dictionary.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word.to_lowercase());
        }
    }

    info!("loaded {} words", words.len());

    Ok(words)
}
