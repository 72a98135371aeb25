//! The spell checker facade tying the trie to its word list.

use std::path::Path;

use crate::error::Result;
use crate::spelling::trie::Trie;
use crate::spelling::wordlist;

/// A spell checker over a fixed dictionary.
///
/// Owns the trie and lowercases query tokens before consulting it, so
/// embedders can hand user input straight in. The dictionary is built once
/// and read-only afterwards.
pub struct SpellChecker {
    trie: Trie,
}

impl SpellChecker {
    /// Build a checker from an in-memory word sequence.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = Trie::from_words(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        SpellChecker { trie }
    }

    /// Build a checker from a word list file with one word per line.
    pub fn from_word_list<P: AsRef<Path>>(path: P) -> Result<Self> {
        let words = wordlist::load(path)?;
        Ok(SpellChecker {
            trie: Trie::from_words(words),
        })
    }

    /// Check whether a token is a dictionary word.
    pub fn check(&self, word: &str) -> bool {
        self.trie.contains(&word.to_lowercase())
    }

    /// Dictionary words one letter longer than `prefix`.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.trie.completions(&prefix.to_lowercase())
    }

    /// Dictionary words differing from `word` only in its last character,
    /// or by dropping it.
    pub fn end_corrections(&self, word: &str) -> Result<Vec<String>> {
        self.trie.end_corrections(&word.to_lowercase())
    }

    /// Dictionary words one insertion, deletion, or substitution away from
    /// `word`.
    pub fn corrections(&self, word: &str) -> Result<Vec<String>> {
        self.trie.corrections(&word.to_lowercase())
    }

    /// Number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }
}
