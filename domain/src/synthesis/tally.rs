//! Ordered word frequency counter

use crate::util::lowercase_words;
use std::collections::HashMap;

/// Words at or below this many characters are ignored
pub const SHORT_WORD_CHARS: usize = 3;

/// Frequency count of lowercase words, remembering first-seen order.
///
/// Every occurrence counts, so a word repeated inside one contribution
/// contributes more than once.
#[derive(Debug, Clone, Default)]
pub struct WordTally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordTally {
    /// Tally every word longer than [`SHORT_WORD_CHARS`] across `texts`
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tally = Self::default();
        for text in texts {
            for word in lowercase_words(text) {
                if word.chars().count() > SHORT_WORD_CHARS {
                    tally.add(word);
                }
            }
        }
        tally
    }

    pub fn add(&mut self, word: String) {
        match self.index.get(&word) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&i| self.entries[i].1)
    }

    /// Words whose count reaches `threshold`, in first-seen order
    pub fn at_least(&self, threshold: f64) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, n)| *n as f64 >= threshold)
            .map(|(w, _)| w.as_str())
            .collect()
    }

    /// The `n` most frequent words; ties keep first-seen order
    pub fn most_frequent(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(w, _)| w.as_str()).collect()
    }
}
