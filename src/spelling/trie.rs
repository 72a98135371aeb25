//! The prefix-tree dictionary and its traversal algorithms.
//!
//! Every query walks the tree one character at a time and exits early when a
//! child is missing, so lookups never fail; no-match outcomes are `false` or
//! an empty vector. The only error any operation can raise is an invalid
//! argument at the API boundary.

use std::collections::HashSet;

use crate::error::{OrthosError, Result};

/// The number of letters in the alphabet.
const NUM_LETTERS: usize = 26;

/// Map a character to its child slot, if it is in the dictionary alphabet.
fn slot(ch: char) -> Option<usize> {
    ch.is_ascii_lowercase().then(|| ch as usize - 'a' as usize)
}

/// The letter stored at a child slot.
fn letter(slot: usize) -> char {
    (b'a' + slot as u8) as char
}

/// A node of the dictionary trie.
///
/// Each node owns at most one child per lowercase letter and records whether
/// the path from the root to it spells a complete word.
#[derive(Debug)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; NUM_LETTERS],
    is_word: bool,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: [const { None }; NUM_LETTERS],
            is_word: false,
        }
    }

    fn child(&self, ch: char) -> Option<&TrieNode> {
        slot(ch).and_then(|i| self.children[i].as_deref())
    }
}

/// A dictionary held as a prefix tree.
///
/// Built once from a word list and queried afterwards. Nothing after
/// construction mutates node contents, so a built trie can be shared freely
/// across concurrent readers.
#[derive(Debug)]
pub struct Trie {
    root: Box<TrieNode>,
    words: usize,
}

impl Trie {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Trie {
            root: Box::new(TrieNode::new()),
            words: 0,
        }
    }

    /// Build a dictionary from a sequence of lowercase words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.add(word.as_ref());
        }
        trie
    }

    /// Insert a word, creating any missing nodes along its path.
    ///
    /// Inserting a word twice leaves the trie unchanged relative to
    /// inserting it once. Input must already be lowercase `a..=z`; the empty
    /// string and words containing any other character are outside the
    /// dictionary alphabet and are ignored.
    pub fn add(&mut self, word: &str) {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return;
        }
        let mut cur = &mut self.root;
        for b in word.bytes() {
            let i = (b - b'a') as usize;
            cur = cur.children[i].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        if !cur.is_word {
            cur.is_word = true;
            self.words += 1;
        }
    }

    /// Check whether a word is in the dictionary.
    ///
    /// A word that is only a proper prefix of dictionary entries reports
    /// `false`. The empty string reports the root's word flag, which is
    /// `false` under normal construction.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_word)
    }

    /// Dictionary words exactly one letter longer than `prefix` that start
    /// with it, in `a..=z` order.
    ///
    /// Returns an empty vector when `prefix` is not a prefix of any
    /// dictionary entry.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let Some(node) = self.walk(prefix) else {
            return Vec::new();
        };
        node.children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.as_ref().is_some_and(|c| c.is_word))
            .map(|(i, _)| format!("{prefix}{}", letter(i)))
            .collect()
    }

    /// Dictionary words obtained by editing only the last character of
    /// `word`: dropping it, or substituting another letter for it.
    ///
    /// The shortened form comes first when it is itself a word, followed by
    /// substitutions in `a..=z` order. `word` itself is never included, and
    /// appending a letter is `completions` territory. Fails on an empty
    /// word, which has no last character to vary.
    pub fn end_corrections(&self, word: &str) -> Result<Vec<String>> {
        let mut chars = word.chars();
        let Some(last) = chars.next_back() else {
            return Err(OrthosError::invalid_argument(
                "cannot correct the last character of an empty word",
            ));
        };
        let stem = chars.as_str();
        let Some(node) = self.walk(stem) else {
            return Ok(Vec::new());
        };
        let mut corrections = Vec::new();
        if node.is_word {
            corrections.push(stem.to_string());
        }
        for (i, child) in node.children.iter().enumerate() {
            if letter(i) != last && child.as_ref().is_some_and(|c| c.is_word) {
                corrections.push(format!("{stem}{}", letter(i)));
            }
        }
        Ok(corrections)
    }

    /// Dictionary words reachable from `word` by exactly one edit: deleting,
    /// substituting, or inserting a single character at any position.
    ///
    /// Candidates are scanned deterministically (deletions, then
    /// substitutions, then insertions, positions left to right and letters
    /// `a..=z` within a position) and deduplicated by first occurrence.
    /// `word` itself is never a candidate: substitution skips the incumbent
    /// letter, and the other two edits change the length. Fails on an empty
    /// word; `completions("")` already enumerates every one-letter word.
    pub fn corrections(&self, word: &str) -> Result<Vec<String>> {
        if word.is_empty() {
            return Err(OrthosError::invalid_argument(
                "cannot derive single-character edits of an empty word",
            ));
        }
        let chars: Vec<char> = word.chars().collect();
        let mut seen = HashSet::new();
        let mut corrections = Vec::new();
        let mut consider = |candidate: String| {
            if self.contains(&candidate) && seen.insert(candidate.clone()) {
                corrections.push(candidate);
            }
        };

        // Deletions
        for i in 0..chars.len() {
            let mut candidate = chars.clone();
            candidate.remove(i);
            consider(candidate.into_iter().collect());
        }

        // Substitutions
        for i in 0..chars.len() {
            for ch in 'a'..='z' {
                if ch != chars[i] {
                    let mut candidate = chars.clone();
                    candidate[i] = ch;
                    consider(candidate.into_iter().collect());
                }
            }
        }

        // Insertions, before the first character through after the last
        for i in 0..=chars.len() {
            for ch in 'a'..='z' {
                let mut candidate = chars.clone();
                candidate.insert(i, ch);
                consider(candidate.into_iter().collect());
            }
        }

        Ok(corrections)
    }

    /// Number of distinct words held.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Check if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Follow `path` from the root, stopping at the first missing child.
    fn walk(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&*self.root, |node, ch| node.child(ch))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        Trie::from_words(["cat", "cats", "cart", "car", "bat"])
    }

    #[test]
    fn test_membership_after_build() {
        let trie = sample();
        for word in ["cat", "cats", "cart", "car", "bat"] {
            assert!(trie.contains(word), "{word}");
        }
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("c"));
        assert!(!trie.contains("dog"));
        assert!(!trie.contains("catsup"));
        assert!(!trie.contains(""));
        assert_eq!(trie.len(), 5);
    }

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(!trie.contains("cat"));
        assert!(trie.completions("ca").is_empty());
    }

    #[test]
    fn test_duplicate_insertion_is_idempotent() {
        let once = sample();
        let twice = Trie::from_words([
            "cat", "cats", "cart", "car", "bat", "cat", "bat", "cart",
        ]);
        assert_eq!(once.len(), twice.len());
        for word in ["cat", "cats", "cart", "car", "bat"] {
            assert_eq!(once.contains(word), twice.contains(word));
        }
        assert_eq!(once.completions("ca"), twice.completions("ca"));
    }

    #[test]
    fn test_out_of_alphabet_input_is_ignored() {
        let mut trie = Trie::new();
        trie.add("");
        trie.add("Cat");
        trie.add("cat's");
        assert!(trie.is_empty());
        assert!(!trie.contains(""));
        assert!(!trie.contains("cat"));
    }

    #[test]
    fn test_completions_alphabetical() {
        let trie = sample();
        assert_eq!(trie.completions("ca"), vec!["car", "cat"]);
        assert_eq!(trie.completions("cat"), vec!["cats"]);
        assert_eq!(trie.completions("bat"), Vec::<String>::new());
    }

    #[test]
    fn test_completions_of_invalid_prefix() {
        let trie = sample();
        assert!(trie.completions("x").is_empty());
        assert!(trie.completions("cax").is_empty());
    }

    #[test]
    fn test_completions_of_empty_prefix() {
        let trie = Trie::from_words(["a", "i", "cat"]);
        assert_eq!(trie.completions(""), vec!["a", "i"]);
    }

    #[test]
    fn test_end_corrections() {
        let trie = sample();
        // "ca" is not a word, so only the t->r substitution survives.
        assert_eq!(trie.end_corrections("cat").unwrap(), vec!["car"]);
        // Dropping the last character of "cats" yields "cat".
        assert_eq!(trie.end_corrections("cats").unwrap(), vec!["cat"]);
    }

    #[test]
    fn test_end_corrections_emit_stem_first() {
        let trie = Trie::from_words(["ca", "cat", "car", "cab"]);
        assert_eq!(trie.end_corrections("cat").unwrap(), vec!["ca", "cab", "car"]);
    }

    #[test]
    fn test_end_corrections_never_contain_input() {
        let trie = sample();
        for word in ["cat", "cats", "cart", "car", "bat"] {
            assert!(!trie.end_corrections(word).unwrap().contains(&word.to_string()));
        }
    }

    #[test]
    fn test_end_corrections_of_invalid_stem() {
        let trie = sample();
        assert_eq!(trie.end_corrections("xyz").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_end_corrections_of_empty_word() {
        let trie = sample();
        let err = trie.end_corrections("").unwrap_err();
        assert!(matches!(err, OrthosError::InvalidArgument(_)));
    }

    #[test]
    fn test_corrections_scan_order() {
        let trie = sample();
        // Substitutions surface "bat" and "car", insertions "cart" and
        // "cats"; no deletion of "cat" is a word.
        assert_eq!(
            trie.corrections("cat").unwrap(),
            vec!["bat", "car", "cart", "cats"]
        );
    }

    #[test]
    fn test_corrections_exclude_two_edit_words() {
        let trie = sample();
        let corrections = trie.corrections("bat").unwrap();
        assert_eq!(corrections, vec!["cat"]);
        // "cart" is two edits from "bat" and must stay out.
        assert!(!corrections.contains(&"cart".to_string()));
    }

    #[test]
    fn test_corrections_deletion_and_deduplication() {
        let trie = Trie::from_words(["cat", "cata", "catt"]);
        // Deleting either trailing letter of "catt" yields "cat"; the result
        // must report it once.
        assert_eq!(trie.corrections("catt").unwrap(), vec!["cat", "cata"]);
    }

    #[test]
    fn test_corrections_never_contain_input() {
        let trie = sample();
        for word in ["cat", "cats", "cart", "car", "bat"] {
            assert!(!trie.corrections(word).unwrap().contains(&word.to_string()));
        }
    }

    #[test]
    fn test_corrections_of_single_letter_word() {
        let trie = Trie::from_words(["a", "i", "at"]);
        // Deleting the only character yields the empty string, never a word.
        assert_eq!(trie.corrections("i").unwrap(), vec!["a"]);
        // Substitution finds "i", insertion after the last character "at".
        assert_eq!(trie.corrections("a").unwrap(), vec!["i", "at"]);
    }

    #[test]
    fn test_corrections_of_empty_word() {
        let trie = sample();
        let err = trie.corrections("").unwrap_err();
        assert!(matches!(err, OrthosError::InvalidArgument(_)));
    }
}
