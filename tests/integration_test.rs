/// Integration tests for the corpus analyzer
///
/// These tests load word lists from disk and verify the complete report,
/// including keyword attribution, histograms, rankings and rule matches.

use std::path::Path;

use corpus_analyzer::app::run_analyzer;
use corpus_analyzer::core::classify::CharClass;
use corpus_analyzer::core::tokenizer::tokenize;
use corpus_analyzer::utils::file_utils::read_corpus;
use corpus_analyzer::{analyze_file, AnalyzerConfig, CorpusAnalyzer, KeywordSet};

#[test]
fn test_analyze_test_file() {
    let report = analyze_file(Path::new("tests/test_data.txt"), &["pass", "word", "summer"])
        .expect("Failed to analyze test file");

    assert_eq!(report.total_words, 15);

    let source = report.source.as_ref().expect("source metadata");
    assert_eq!(source.file_name, "test_data.txt");
    assert_eq!(source.line_count, 15);

    // A word only counts towards the first keyword it contains
    assert_eq!(report.keyword("pass").map(|k| k.count), Some(3));
    assert_eq!(report.keyword("word").map(|k| k.count), Some(1));
    assert_eq!(report.keyword("summer").map(|k| k.count), Some(2));
    assert_eq!(report.keyword("pass").map(|k| k.percentage), Some(20.0));

    let histogram: Vec<_> = report
        .length_histogram
        .iter()
        .map(|bucket| (bucket.length, bucket.count))
        .collect();
    assert_eq!(
        histogram,
        vec![(4, 1), (6, 2), (7, 2), (8, 2), (9, 2), (10, 2), (11, 3), (12, 1)]
    );

    let rule_counts: Vec<_> = report.rules.iter().map(|rule| rule.count).collect();
    // Four/two/three from the end, all kinds, capital+symbol, capital+digit, 2000s, 1900s
    assert_eq!(rule_counts[0], 8);
    assert_eq!(rule_counts[3], 2);
    assert_eq!(rule_counts[4], 4);
    assert_eq!(rule_counts[5], 3);
    assert_eq!(rule_counts[6], 4);
    assert_eq!(rule_counts[7], 2);
}

#[test]
fn test_spec_style_sample() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sample.txt");
    std::fs::write(&path, "Pass1234 word2024 ABC!@# test\n").expect("Failed to write sample");

    let report = analyze_file(&path, &["pass", "word"]).expect("Failed to analyze sample");

    assert_eq!(report.total_words, 4);
    assert_eq!(report.keyword("pass").map(|k| k.count), Some(1));
    assert_eq!(report.keyword("word").map(|k| k.count), Some(1));
    assert_eq!(report.rule("Four digits at the end").map(|r| r.count), Some(2));
    assert_eq!(report.rule("First capital, last symbol").map(|r| r.count), Some(1));
    assert_eq!(report.rule("Digits are between 2000 and 2999").map(|r| r.count), Some(1));

    let histogram: Vec<_> = report
        .length_histogram
        .iter()
        .map(|bucket| (bucket.length, bucket.count))
        .collect();
    assert_eq!(histogram, vec![(4, 1), (6, 1), (8, 2)]);
}

#[test]
fn test_empty_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let empty_file_path = temp_dir.path().join("empty.txt");
    std::fs::write(&empty_file_path, "").expect("Failed to write empty file");

    let report = analyze_file(&empty_file_path, &["pass"]).expect("Failed to analyze empty file");

    assert_eq!(report.total_words, 0);
    assert!(report.length_histogram.is_empty());
    assert!(report.top_sequences.is_empty());
    for summary in &report.char_classes {
        assert!(summary.top.is_empty(), "{:?} should be empty", summary.class);
    }
    assert!(report.keywords.iter().all(|k| k.count == 0 && k.percentage == 0.0));
    assert!(report.rules.iter().all(|r| r.count == 0 && r.percentage == 0.0));
}

#[test]
fn test_no_keywords() {
    let report = analyze_file(Path::new("tests/test_data.txt"), &[]).expect("Failed to analyze test file");
    assert!(report.keywords.is_empty());
    assert_eq!(report.total_words, 15);
}

#[test]
fn test_missing_file_is_an_error() {
    let result = analyze_file(Path::new("tests/does_not_exist.txt"), &["pass"]);
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("File not found"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = AnalyzerConfig {
        top: 0,
        ..AnalyzerConfig::default()
    };
    let result = run_analyzer(Path::new("tests/test_data.txt"), &KeywordSet::default(), &config, None);
    assert!(result.is_err());
}

#[test]
fn test_lines_are_joined_with_spaces() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("lines.txt");
    std::fs::write(&path, "abcde\nabcde\n").expect("Failed to write file");

    let config = AnalyzerConfig {
        ngram_length: 6,
        ..AnalyzerConfig::default()
    };
    let report = run_analyzer(&path, &KeywordSet::default(), &config, None).expect("analysis succeeds");

    // Content is "abcde abcde "; "abcde " is the only repeated window
    assert_eq!(report.top_sequences.len(), 1);
    assert_eq!(report.top_sequences[0].value, "abcde ");
    assert_eq!(report.top_sequences[0].count, 2);
    assert_eq!(report.top_sequences[0].percentage, 100.0);
}

#[test]
fn test_ranked_lists_are_deterministic() {
    let corpus = read_corpus(Path::new("tests/test_data.txt"), None).expect("Failed to read test file");
    let config = AnalyzerConfig {
        ngram_length: 4,
        top: 5,
        ..AnalyzerConfig::default()
    };
    let analyzer = CorpusAnalyzer::new(&config, KeywordSet::parse("pass"));

    let first = analyzer.analyze_sequential(&corpus.content);
    for _ in 0..5 {
        assert_eq!(analyzer.analyze_sequential(&corpus.content), first);
    }

    assert!(first.top_sequences.len() <= 5);
    assert!(first.top_sequences.iter().all(|entry| entry.count > 1));
    for pair in first.top_sequences.windows(2) {
        assert!(
            pair[0].count > pair[1].count || (pair[0].count == pair[1].count && pair[0].value < pair[1].value)
        );
    }
}

#[test]
fn test_char_class_totals_cover_whole_corpus() {
    let corpus = read_corpus(Path::new("tests/test_data.txt"), None).expect("Failed to read test file");
    let config = AnalyzerConfig {
        top: 3,
        ..AnalyzerConfig::default()
    };
    let report = CorpusAnalyzer::new(&config, KeywordSet::default()).analyze_sequential(&corpus.content);

    for class in CharClass::ALL {
        let expected = corpus.content.chars().filter(|c| class.matches(*c)).count();
        let summary = report.char_class(class).expect("class summary");
        assert_eq!(summary.total, expected);
        assert!(summary.top.len() <= 3);
    }

    let digits = report.char_class(CharClass::Digit).expect("digit summary");
    assert_eq!(digits.top[0].value, "2");

    assert_eq!(report.total_words, tokenize(&corpus.content).len());
}
