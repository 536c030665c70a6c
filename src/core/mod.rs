/// Core module for corpus analysis
///
/// This module contains the tokenizer, the individual counting analyzers,
/// the rule catalog and the analyzer that combines them into a report.

pub mod analyzer;
pub mod classify;
pub mod frequency;
pub mod report;
pub mod rules;
pub mod tokenizer;
pub mod words;
