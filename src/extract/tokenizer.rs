//! Word tokenizer
//!
//! A word is a maximal run of Unicode letters (general category `L*`, any
//! script); every other character separates words. Digits, letter numbers
//! such as `Ⅻ`, combining marks and symbols are therefore never part of a
//! word. No case folding or stemming is applied.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Returns true for characters in one of the letter categories
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

/// Iterates over the word tokens of `text` in source order
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_letter(c))
        .filter(|token| !token.is_empty())
}

/// Splits document text into an ordered sequence of words
///
/// # Example
///
/// ```
/// use pagestat::extract::tokenize;
///
/// assert_eq!(
///     tokenize("Cat and dog. Cat runs!"),
///     vec!["Cat", "and", "dog", "Cat", "runs"]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).map(str::to_string).collect()
}
