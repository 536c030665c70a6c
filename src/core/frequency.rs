/// Frequency tables for characters and character sequences
///
/// Counting is done into a `FrequencyTable`; ranking is always by descending
/// count with ties broken by ascending key, so identical input yields an
/// identical ranking.

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::classify::CharClass;
use crate::core::report::{percentage, CharClassSummary, RankedEntry};

/// Occurrence counts keyed by `K`
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Hash + Eq + Ord> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`
    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count recorded for `key`
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Rank keys with at least `min_count` occurrences and keep the first `k`
    ///
    /// # Arguments
    ///
    /// * `k` - Maximum number of entries to return
    /// * `min_count` - Entries below this count are not eligible
    ///
    /// # Returns
    ///
    /// Keys with their counts, by descending count then ascending key
    pub fn top_k(&self, k: usize, min_count: usize) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self
            .counts
            .iter()
            .filter(|(_, count)| **count >= min_count)
            .map(|(key, count)| (key, *count))
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(k);
        ranked
    }
}

/// Count every character of `content` that belongs to `class`
pub fn count_chars(content: &str, class: CharClass) -> FrequencyTable<char> {
    let mut table = FrequencyTable::new();
    for c in content.chars().filter(|c| class.matches(*c)) {
        table.increment(c);
    }
    table
}

/// Most frequent characters of a class
///
/// # Arguments
///
/// * `content` - Corpus text
/// * `class` - Character class to count
/// * `top` - Number of characters to keep
/// * `total_words` - Percentage denominator
///
/// # Returns
///
/// Class summary holding the top characters and the class totals
pub fn top_chars(content: &str, class: CharClass, top: usize, total_words: usize) -> CharClassSummary {
    let table = count_chars(content, class);

    let ranked = table
        .top_k(top, 1)
        .into_iter()
        .map(|(c, count)| RankedEntry {
            value: c.to_string(),
            count,
            percentage: percentage(count, total_words),
        })
        .collect();

    CharClassSummary {
        class,
        total: table.total(),
        distinct: table.len(),
        top: ranked,
    }
}

/// Count every window of `n` characters in `content`, stride 1
///
/// Windows are measured in characters, not bytes. A corpus shorter than `n`
/// characters yields an empty table.
pub fn count_ngrams(content: &str, n: usize) -> FrequencyTable<&str> {
    let mut table = FrequencyTable::new();
    if n == 0 {
        return table;
    }

    // Byte offset of every character start plus the end of the text
    let bounds: Vec<usize> = content
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(content.len()))
        .collect();

    let char_count = bounds.len() - 1;
    if char_count < n {
        return table;
    }

    for start in 0..=(char_count - n) {
        table.increment(&content[bounds[start]..bounds[start + n]]);
    }

    table
}

/// Most repeated character sequences of length `n`
///
/// Sequences seen only once are never reported.
pub fn top_sequences(content: &str, n: usize, top: usize, total_words: usize) -> Vec<RankedEntry> {
    count_ngrams(content, n)
        .top_k(top, 2)
        .into_iter()
        .map(|(sequence, count)| RankedEntry {
            value: sequence.to_string(),
            count,
            percentage: percentage(count, total_words),
        })
        .collect()
}
