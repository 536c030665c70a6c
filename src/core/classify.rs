/// Character classification by Unicode general category
///
/// All character-level predicates used by the analyzers live here so that the
/// frequency tables and the rule catalog agree on what a "digit" or a
/// "symbol" is.

use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Character classes reported by the character frequency analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Any Unicode letter (L*)
    Letter,
    /// Decimal digit (Nd)
    Digit,
    /// Symbol or punctuation (S* or P*)
    Symbol,
}

impl CharClass {
    /// Report order of the classes
    pub const ALL: [CharClass; 3] = [CharClass::Letter, CharClass::Digit, CharClass::Symbol];

    /// Whether `c` belongs to this class
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Letter => is_letter(c),
            CharClass::Digit => is_decimal_digit(c),
            CharClass::Symbol => is_symbol(c),
        }
    }

    /// Human readable label used in report headings
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Letter => "alpha",
            CharClass::Digit => "number",
            CharClass::Symbol => "symbol",
        }
    }
}

pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

pub fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Symbol (Sm, Sc, Sk, So) or punctuation (Pc, Pd, Ps, Pe, Pi, Pf, Po)
pub fn is_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
            | GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

pub fn is_uppercase(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

pub fn is_lowercase(c: char) -> bool {
    get_general_category(c) == GeneralCategory::LowercaseLetter
}
