/// Password-shape rule catalog
///
/// Each rule is a named predicate over a single word. Rules are independent:
/// a word may satisfy any number of them. The suffix rules only inspect the
/// single character at the given distance from the end; they do not require
/// the whole suffix to be digits.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::core::classify::{is_decimal_digit, is_lowercase, is_symbol, is_uppercase};
use crate::core::report::{percentage, RuleResult};

lazy_static! {
    /// ASCII digit runs, matched leftmost-longest so each match is maximal
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").expect("digit run pattern is valid");
}

/// A named word predicate
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: fn(&str) -> bool,
}

impl Rule {
    pub fn matches(&self, word: &str) -> bool {
        (self.predicate)(word)
    }
}

/// Built-in rules in report order
pub const RULE_CATALOG: [Rule; 8] = [
    Rule {
        name: "Four digits at the end",
        predicate: fourth_from_end_is_digit,
    },
    Rule {
        name: "Two digits at the end",
        predicate: second_from_end_is_digit,
    },
    Rule {
        name: "Three digits at the end",
        predicate: third_from_end_is_digit,
    },
    Rule {
        name: "Upper + lower + num + symbol",
        predicate: has_all_character_kinds,
    },
    Rule {
        name: "First capital, last symbol",
        predicate: first_capital_last_symbol,
    },
    Rule {
        name: "First capital, last number",
        predicate: first_capital_last_digit,
    },
    Rule {
        name: "Digits are between 2000 and 2999",
        predicate: has_year_2000s,
    },
    Rule {
        name: "Digits are between 1900 and 1999",
        predicate: has_year_1900s,
    },
];

/// Character `distance` positions from the end, 1 being the last one
fn nth_from_end(word: &str, distance: usize) -> Option<char> {
    distance.checked_sub(1).and_then(|skip| word.chars().rev().nth(skip))
}

fn nth_from_end_is_digit(word: &str, distance: usize) -> bool {
    nth_from_end(word, distance).map_or(false, is_decimal_digit)
}

fn fourth_from_end_is_digit(word: &str) -> bool {
    nth_from_end_is_digit(word, 4)
}

fn second_from_end_is_digit(word: &str) -> bool {
    nth_from_end_is_digit(word, 2)
}

fn third_from_end_is_digit(word: &str) -> bool {
    nth_from_end_is_digit(word, 3)
}

fn has_all_character_kinds(word: &str) -> bool {
    let (mut upper, mut lower, mut digit, mut symbol) = (false, false, false, false);
    for c in word.chars() {
        upper |= is_uppercase(c);
        lower |= is_lowercase(c);
        digit |= is_decimal_digit(c);
        symbol |= is_symbol(c);
    }
    upper && lower && digit && symbol
}

fn first_capital_last_symbol(word: &str) -> bool {
    match (word.chars().next(), word.chars().next_back()) {
        (Some(first), Some(last)) => is_uppercase(first) && is_symbol(last),
        _ => false,
    }
}

fn first_capital_last_digit(word: &str) -> bool {
    match (word.chars().next(), word.chars().next_back()) {
        (Some(first), Some(last)) => is_uppercase(first) && is_decimal_digit(last),
        _ => false,
    }
}

/// Whether `word` holds a run of at least four digits valued in `low..=high`
///
/// Runs too long to fit an integer are ignored.
pub fn has_digit_run_between(word: &str, low: u64, high: u64) -> bool {
    DIGIT_RUN
        .find_iter(word)
        .filter(|run| run.as_str().len() >= 4)
        .filter_map(|run| run.as_str().parse::<u64>().ok())
        .any(|value| (low..=high).contains(&value))
}

fn has_year_2000s(word: &str) -> bool {
    has_digit_run_between(word, 2000, 2999)
}

fn has_year_1900s(word: &str) -> bool {
    has_digit_run_between(word, 1900, 1999)
}

/// Evaluate every catalog rule over `words`
///
/// # Arguments
///
/// * `words` - Tokenized corpus
/// * `total_words` - Percentage denominator
///
/// # Returns
///
/// One result per rule, in catalog order
pub fn evaluate(words: &[&str], total_words: usize) -> Vec<RuleResult> {
    RULE_CATALOG
        .iter()
        .map(|rule| {
            let count = words.iter().filter(|word| rule.matches(word)).count();
            debug!("Rule '{}' matched {} words", rule.name, count);
            RuleResult {
                name: rule.name.to_string(),
                count,
                percentage: percentage(count, total_words),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_rules_check_single_position() {
        assert!(fourth_from_end_is_digit("Pass1234"));
        assert!(fourth_from_end_is_digit("word2024"));
        // Only the fourth character from the end is inspected
        assert!(fourth_from_end_is_digit("1abc"));
        assert!(!fourth_from_end_is_digit("abcde12"));
        assert!(!fourth_from_end_is_digit("123"));

        assert!(second_from_end_is_digit("ab1c"));
        assert!(!second_from_end_is_digit("abc1"));
        assert!(third_from_end_is_digit("x9yz"));
        assert!(!third_from_end_is_digit("9"));
    }

    #[test]
    fn test_suffix_rules_multibyte() {
        assert!(fourth_from_end_is_digit("é1ééé"));
        assert!(!fourth_from_end_is_digit("1ééé é"));
    }

    #[test]
    fn test_all_character_kinds() {
        assert!(has_all_character_kinds("Passw0rd!"));
        assert!(!has_all_character_kinds("Password!"));
        assert!(!has_all_character_kinds("passw0rd!"));
        assert!(!has_all_character_kinds("PASSW0RD!"));
        assert!(!has_all_character_kinds("Passw0rd"));
    }

    #[test]
    fn test_first_capital_rules() {
        assert!(first_capital_last_symbol("ABC!@#"));
        assert!(first_capital_last_symbol("Hello."));
        assert!(!first_capital_last_symbol("hello!"));
        assert!(!first_capital_last_symbol("Hello"));
        assert!(!first_capital_last_symbol(""));

        assert!(first_capital_last_digit("Summer1"));
        assert!(!first_capital_last_digit("summer1"));
        assert!(!first_capital_last_digit("Summer!"));
        assert!(!first_capital_last_digit(""));
    }

    #[test]
    fn test_digit_run_ranges() {
        assert!(has_year_2000s("word2024"));
        assert!(has_year_2000s("x02024y"));
        assert!(!has_year_2000s("word20245"));
        assert!(!has_year_2000s("abc200"));
        assert!(has_year_1900s("born1987!"));
        assert!(!has_year_1900s("word2024"));
        assert!(has_year_1900s("1999and2001"));
        assert!(has_year_2000s("1999and2001"));
        assert!(!has_year_2000s("99999999999999999999999"));
    }

    #[test]
    fn test_year_rules_exclusive_per_run() {
        for value in 1000..3100u64 {
            let word = value.to_string();
            assert!(!(has_year_2000s(&word) && has_year_1900s(&word)));
        }
    }

    #[test]
    fn test_evaluate_order_and_counts() {
        let words = ["Pass1234", "word2024", "ABC!@#", "test"];
        let results = evaluate(&words, words.len());

        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<_> = RULE_CATALOG.iter().map(|r| r.name).collect();
        assert_eq!(names, expected);

        assert_eq!(results[0].count, 2);
        assert_eq!(results[0].percentage, 50.0);
        assert_eq!(results[4].count, 1);
        assert_eq!(results[6].count, 1);
        assert_eq!(results[7].count, 0);
    }

    #[test]
    fn test_evaluate_no_words() {
        let results = evaluate(&[], 0);
        assert_eq!(results.len(), RULE_CATALOG.len());
        assert!(results.iter().all(|r| r.count == 0 && r.percentage == 0.0));
    }
}
