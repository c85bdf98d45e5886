use crate::trie::Trie;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_MAX_WORDS: usize = 256;
pub const DEFAULT_MAX_WORD_LEN: usize = 100;

/// Caps applied while reading a dictionary source
#[derive(Clone, Copy)]
pub struct LoadLimits {
    pub max_words: usize,
    pub max_word_len: usize,
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

/// Loaded word list plus the trie built from it
pub struct Dictionary {
    words: Vec<String>,
    trie: Trie,
}

impl Dictionary {
    /// Loads words from a newline-delimited dictionary file
    pub fn load(path: &Path, limits: LoadLimits) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open dictionary file {}", path.display()))?;
        Self::from_reader(BufReader::new(file), limits)
    }

    /// Builds a dictionary from any line source
    pub fn from_reader<R: BufRead>(reader: R, limits: LoadLimits) -> Result<Self> {
        let words = Self::read_words(reader, limits)?;
        let mut trie = Trie::new();

        for word in &words {
            trie.insert(word);
        }

        Ok(Self { words, trie })
    }

    /// Gets the loaded words in file order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Gets the occurrence count recorded for `word`
    pub fn occurrences(&self, word: &str) -> usize {
        self.trie.occurrences(word)
    }

    fn read_words<R: BufRead>(reader: R, limits: LoadLimits) -> Result<Vec<String>> {
        let mut words = Vec::new();

        for line in reader.lines().take(limits.max_words) {
            let mut word = line.context("failed to read dictionary line")?;
            if word.chars().count() > limits.max_word_len {
                word = word.chars().take(limits.max_word_len).collect();
            }
            words.push(word);
        }

        Ok(words)
    }
}
