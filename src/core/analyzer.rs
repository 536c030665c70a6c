/// Corpus analyzer implementation
///
/// This file contains the CorpusAnalyzer, which runs the word, keyword,
/// character, sequence and rule analyses over one corpus and assembles
/// their output into a single Report.

use std::time::Instant;

use anyhow::Result;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::AnalyzerConfig;
use crate::core::classify::CharClass;
use crate::core::frequency::{top_chars, top_sequences};
use crate::core::report::{CharClassSummary, RankedEntry, Report, RuleResult};
use crate::core::rules;
use crate::core::tokenizer::tokenize;
use crate::core::words::{KeywordSet, WordStatistics};

/// Core corpus analyzer structure
#[derive(Debug, Clone)]
pub struct CorpusAnalyzer {
    /// Ranking and scheduling options
    config: AnalyzerConfig,

    /// Keywords to attribute words to
    keywords: KeywordSet,
}

impl CorpusAnalyzer {
    /// Create a new CorpusAnalyzer instance
    ///
    /// # Arguments
    ///
    /// * `config` - Validated analyzer configuration
    /// * `keywords` - Keywords to look for inside words
    ///
    /// # Returns
    ///
    /// A new CorpusAnalyzer instance
    pub fn new(config: &AnalyzerConfig, keywords: KeywordSet) -> Self {
        Self {
            config: config.clone(),
            keywords,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Analyze a corpus and build its report
    ///
    /// Runs the analyzers one after another when a single worker is
    /// configured, otherwise as a join on a local thread pool.
    ///
    /// # Arguments
    ///
    /// * `content` - Corpus text
    ///
    /// # Returns
    ///
    /// The aggregated report
    pub fn analyze(&self, content: &str) -> Result<Report> {
        let start_time = Instant::now();
        self.log_degenerate_input(content);

        let workers = self.config.worker_count();
        let report = if workers <= 1 {
            self.analyze_sequential(content)
        } else {
            debug!("Running analyzers on {} workers", workers);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| anyhow::anyhow!("Failed to build thread pool: {}", e))?;
            pool.install(|| self.analyze_parallel(content))
        };

        info!(
            "Analysis of {} words completed in {:?}",
            report.total_words,
            start_time.elapsed()
        );

        Ok(report)
    }

    /// Run every analyzer on the calling thread
    pub fn analyze_sequential(&self, content: &str) -> Report {
        let words = tokenize(content);
        let total_words = words.len();

        let word_stats = WordStatistics::collect(&words, &self.keywords);
        let sequences = top_sequences(content, self.config.ngram_length, self.config.top, total_words);
        let char_classes = self.char_classes(content, total_words);
        let rule_results = rules::evaluate(&words, total_words);

        self.assemble(word_stats, sequences, char_classes, rule_results)
    }

    /// Run the analyzers as independent passes on the current rayon pool
    pub fn analyze_parallel(&self, content: &str) -> Report {
        let words = tokenize(content);
        let total_words = words.len();

        let (word_stats, (rule_results, (sequences, char_classes))) = rayon::join(
            || WordStatistics::collect(&words, &self.keywords),
            || {
                rayon::join(
                    || rules::evaluate(&words, total_words),
                    || {
                        rayon::join(
                            || top_sequences(content, self.config.ngram_length, self.config.top, total_words),
                            || {
                                CharClass::ALL
                                    .par_iter()
                                    .map(|class| top_chars(content, *class, self.config.top, total_words))
                                    .collect::<Vec<_>>()
                            },
                        )
                    },
                )
            },
        );

        self.assemble(word_stats, sequences, char_classes, rule_results)
    }

    fn char_classes(&self, content: &str, total_words: usize) -> Vec<CharClassSummary> {
        CharClass::ALL
            .iter()
            .map(|class| {
                let summary = top_chars(content, *class, self.config.top, total_words);
                debug!(
                    "Counted {} {} characters ({} distinct)",
                    summary.total,
                    class.label(),
                    summary.distinct
                );
                summary
            })
            .collect()
    }

    fn assemble(
        &self,
        word_stats: WordStatistics,
        top_sequences: Vec<RankedEntry>,
        char_classes: Vec<CharClassSummary>,
        rules: Vec<RuleResult>,
    ) -> Report {
        Report {
            source: None,
            total_words: word_stats.total_words(),
            keywords: word_stats.keyword_occurrences(),
            length_histogram: word_stats.length_histogram(),
            top: self.config.top,
            ngram_length: self.config.ngram_length,
            top_sequences,
            char_classes,
            rules,
        }
    }

    fn log_degenerate_input(&self, content: &str) {
        if content.trim().is_empty() {
            warn!("Corpus contains no words; all percentages will be 0");
        } else if content.chars().count() < self.config.ngram_length {
            warn!(
                "Corpus is shorter than the {}-character sequence window",
                self.config.ngram_length
            );
        }
        if self.keywords.is_empty() {
            warn!("No keywords supplied; keyword statistics will be empty");
        }
    }
}
