/// Word-level statistics: totals, keyword occurrences and length histogram
///
/// The keyword matcher is case-insensitive and attributes a word to at most
/// one keyword, the first one in supplied order that occurs in it.

use std::collections::BTreeMap;

use log::debug;

use crate::core::report::{percentage, KeywordStat, LengthBucket};

/// Ordered set of keywords to look for inside words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    /// Keywords as supplied
    keywords: Vec<String>,
    /// Lowercase forms, same order as `keywords`
    lowered: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set from individual keywords
    ///
    /// Keywords are trimmed, empty keywords are dropped and exact duplicates
    /// keep only their first position.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() || set.keywords.iter().any(|k| k == keyword) {
                continue;
            }
            set.lowered.push(keyword.to_lowercase());
            set.keywords.push(keyword.to_string());
        }
        set
    }

    /// Build a keyword set from a comma separated list
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Index of the first keyword contained in `word`, ignoring case
    pub fn first_match(&self, word: &str) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let word = word.to_lowercase();
        self.lowered.iter().position(|keyword| word.contains(keyword.as_str()))
    }
}

/// Word totals gathered in a single pass over the word sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStatistics {
    total_words: usize,
    keyword_counts: Vec<(String, usize)>,
    lengths: BTreeMap<usize, usize>,
}

impl WordStatistics {
    /// Gather statistics for `words`
    ///
    /// # Arguments
    ///
    /// * `words` - Tokenized corpus
    /// * `keywords` - Keywords to attribute words to
    ///
    /// # Returns
    ///
    /// Totals, keyword counts and the length histogram
    pub fn collect(words: &[&str], keywords: &KeywordSet) -> Self {
        let mut keyword_counts: Vec<(String, usize)> =
            keywords.iter().map(|keyword| (keyword.to_string(), 0)).collect();
        let mut lengths = BTreeMap::new();

        for word in words {
            if let Some(index) = keywords.first_match(word) {
                keyword_counts[index].1 += 1;
            }
            *lengths.entry(word.chars().count()).or_insert(0) += 1;
        }

        debug!(
            "Collected word statistics: {} words, {} distinct lengths",
            words.len(),
            lengths.len()
        );

        Self {
            total_words: words.len(),
            keyword_counts,
            lengths,
        }
    }

    /// Number of words; the denominator of every report percentage
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Count and percentage for each keyword, in supplied order
    pub fn keyword_occurrences(&self) -> Vec<KeywordStat> {
        self.keyword_counts
            .iter()
            .map(|(keyword, count)| KeywordStat {
                keyword: keyword.clone(),
                count: *count,
                percentage: percentage(*count, self.total_words),
            })
            .collect()
    }

    /// Words per character length, ascending by length
    pub fn length_histogram(&self) -> Vec<LengthBucket> {
        self.lengths
            .iter()
            .map(|(length, count)| LengthBucket {
                length: *length,
                count: *count,
            })
            .collect()
    }
}
