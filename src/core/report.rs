/// Report structures produced by a corpus analysis
///
/// Every percentage in a report uses the total word count as its denominator,
/// including character and sequence percentages. Those two can therefore
/// exceed 100.

use serde::Serialize;

use crate::core::classify::CharClass;
use crate::utils::file_utils::FileMetadata;

/// Percentage of `count` relative to `total`, or 0 when `total` is 0
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Occurrences attributed to a single keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordStat {
    pub keyword: String,
    pub count: usize,
    pub percentage: f64,
}

/// Number of words with a given character length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthBucket {
    pub length: usize,
    pub count: usize,
}

/// One entry of a top-K ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub value: String,
    pub count: usize,
    pub percentage: f64,
}

/// Frequency summary for one character class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharClassSummary {
    pub class: CharClass,
    /// Number of characters in the corpus belonging to the class
    pub total: usize,
    /// Number of distinct characters seen for the class
    pub distinct: usize,
    pub top: Vec<RankedEntry>,
}

/// Match count for one rule of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleResult {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// Aggregated result of a single analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Input file details, when the corpus came from a file
    pub source: Option<FileMetadata>,
    pub total_words: usize,
    /// Keyword statistics in the order the keywords were supplied
    pub keywords: Vec<KeywordStat>,
    /// Ascending by length
    pub length_histogram: Vec<LengthBucket>,
    /// Ranking cap used for the top-K lists
    pub top: usize,
    pub ngram_length: usize,
    pub top_sequences: Vec<RankedEntry>,
    /// Letter, digit and symbol summaries, in that order
    pub char_classes: Vec<CharClassSummary>,
    /// Rule results in catalog order
    pub rules: Vec<RuleResult>,
}

impl Report {
    /// True when the corpus contained no words
    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Summary for a character class
    pub fn char_class(&self, class: CharClass) -> Option<&CharClassSummary> {
        self.char_classes.iter().find(|summary| summary.class == class)
    }

    /// Result for a rule by name
    pub fn rule(&self, name: &str) -> Option<&RuleResult> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Statistics for a keyword, as it was supplied
    pub fn keyword(&self, keyword: &str) -> Option<&KeywordStat> {
        self.keywords.iter().find(|stat| stat.keyword == keyword)
    }

    pub fn with_source(mut self, source: FileMetadata) -> Self {
        self.source = Some(source);
        self
    }
}
