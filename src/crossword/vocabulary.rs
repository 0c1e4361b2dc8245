#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The word list a puzzle is filled from.
//!
//! Words are normalised to upper case, deduplicated and kept sorted so that
//! every run over the same list sees the words in the same order. Each word is
//! addressed by a dense [`WordId`], which is what domains and assignments store.

use core::ops::{Index, Range};
use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::path::Path;

/// Dense index of a word inside a [`Vocabulary`].
pub type WordId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    /// Length of each word in characters, cached since it is queried per domain value.
    lengths: Vec<usize>,
}

impl Index<WordId> for Vocabulary {
    type Output = str;

    fn index(&self, index: WordId) -> &Self::Output {
        &self.words[index]
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let words: BTreeSet<String> = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        let words: Vec<String> = words.into_iter().collect();
        let lengths = words.iter().map(|w| w.chars().count()).collect();
        Self { words, lengths }
    }
}

impl Vocabulary {
    /// Parses a newline-delimited word list.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines().collect()
    }

    /// Reads a newline-delimited word list.
    ///
    /// # Errors
    ///
    /// Propagates the first I/O error encountered while reading lines.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(lines.into_iter().collect())
    }

    /// Reads a newline-delimited word list from a file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of word `id` in characters.
    #[must_use]
    pub fn word_len(&self, id: WordId) -> usize {
        self.lengths[id]
    }

    /// The `k`-th character of word `id`, or `None` if the word is shorter.
    #[must_use]
    pub fn get_letter(&self, id: WordId, k: usize) -> Option<char> {
        let word = &self.words[id];
        if word.is_ascii() {
            word.as_bytes().get(k).map(|&b| char::from(b))
        } else {
            word.chars().nth(k)
        }
    }

    /// The `k`-th character of word `id`.
    ///
    /// # Panics
    ///
    /// If `k` is not a valid letter index for the word.
    #[must_use]
    pub fn letter(&self, id: WordId, k: usize) -> char {
        self.get_letter(id, k)
            .unwrap_or_else(|| panic!("letter {k} out of range for {}", self.words[id]))
    }

    /// Looks a word up by its text, after the same normalisation applied on load.
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        let word = word.trim().to_uppercase();
        self.words.binary_search(&word).ok()
    }

    /// All word ids in vocabulary order.
    #[must_use]
    pub fn ids(&self) -> Range<WordId> {
        0..self.words.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
