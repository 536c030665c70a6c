/// Corpus Analyzer - word-list statistics for password and wordlist research
///
/// This library computes structural statistics over a text corpus: word
/// counts and lengths, keyword occurrences, repeated character sequences,
/// character-class frequencies and matches against a catalog of
/// password-shape rules.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main analyzer types for convenience
pub use crate::config::{AnalyzerConfig, ConfigError};
pub use crate::core::analyzer::CorpusAnalyzer;
pub use crate::core::report::Report;
pub use crate::core::words::KeywordSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a single word list and return its report
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the word list
/// * `keywords` - Keywords to count occurrences of
///
/// # Returns
///
/// The report for the file, using the default configuration
pub fn analyze_file<P: AsRef<std::path::Path>>(file_path: P, keywords: &[&str]) -> anyhow::Result<Report> {
    let config = AnalyzerConfig::default();
    app::run_analyzer(file_path.as_ref(), &KeywordSet::new(keywords), &config, None)
}

/// Library configuration and utilities
pub mod config {
    use std::path::{Path, PathBuf};

    use log::info;
    use serde::{Deserialize, Serialize};

    /// Error in the analyzer configuration
    #[derive(Debug, thiserror::Error)]
    pub enum ConfigError {
        #[error("Failed to read configuration file {}: {source}", .path.display())]
        Io {
            path: PathBuf,
            source: std::io::Error,
        },

        #[error("Invalid JSON in configuration file {}: {source}", .path.display())]
        Parse {
            path: PathBuf,
            source: serde_json::Error,
        },

        #[error("{field} must be greater than zero")]
        Zero { field: &'static str },
    }

    /// Options controlling ranking and scheduling
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct AnalyzerConfig {
        /// Number of entries kept in every top-K ranking
        pub top: usize,
        /// Length of the character sequences counted by the sequence analyzer
        pub ngram_length: usize,
        /// Worker threads; 0 uses all available cores, 1 runs sequentially
        pub workers: usize,
    }

    impl Default for AnalyzerConfig {
        fn default() -> Self {
            Self {
                top: 10,
                ngram_length: 10,
                workers: 1,
            }
        }
    }

    impl AnalyzerConfig {
        /// Load configuration from a JSON file
        ///
        /// Fields missing from the file keep their default values.
        pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
            let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let config: Self = serde_json::from_str(&config_str).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Loaded configuration from {}", path.display());
            config.validate()?;
            Ok(config)
        }

        pub fn validate(&self) -> Result<(), ConfigError> {
            if self.top == 0 {
                return Err(ConfigError::Zero { field: "top" });
            }
            if self.ngram_length == 0 {
                return Err(ConfigError::Zero { field: "ngram_length" });
            }
            Ok(())
        }

        /// Effective number of worker threads
        pub fn worker_count(&self) -> usize {
            if self.workers == 0 {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            } else {
                self.workers
            }
        }
    }

}

/// Command-line application functionality
pub mod app {
    use std::path::Path;

    use log::info;

    use crate::config::AnalyzerConfig;
    use crate::core::analyzer::CorpusAnalyzer;
    use crate::core::report::Report;
    use crate::core::words::KeywordSet;
    use crate::utils::file_utils::read_corpus;

    /// Load a word list and analyze it
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the word list
    /// * `keywords` - Keywords to count occurrences of
    /// * `config` - Analyzer configuration
    /// * `max_size` - Optional file size limit in bytes
    ///
    /// # Returns
    ///
    /// The report, with the file metadata attached
    pub fn run_analyzer(
        file_path: &Path,
        keywords: &KeywordSet,
        config: &AnalyzerConfig,
        max_size: Option<u64>,
    ) -> anyhow::Result<Report> {
        config.validate()?;

        let corpus = read_corpus(file_path, max_size)?;
        info!("Analyzing corpus: {}", file_path.display());

        let analyzer = CorpusAnalyzer::new(config, keywords.clone());
        let report = analyzer.analyze(&corpus.content)?;

        Ok(report.with_source(corpus.metadata))
    }
}
