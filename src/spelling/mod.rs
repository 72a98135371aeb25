//! Spell checking built on a prefix-tree dictionary.
//!
//! This module provides the trie dictionary itself, a plain-text word list
//! loader, and a [`SpellChecker`] facade that ties the two together for use
//! from the CLI or as an embedded library.

pub mod checker;
pub mod trie;
pub mod wordlist;

pub use checker::SpellChecker;
pub use trie::Trie;
