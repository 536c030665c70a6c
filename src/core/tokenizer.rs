/// Whitespace tokenizer for corpus text
///
/// A token is a maximal run of non-whitespace characters. Punctuation is kept
/// as part of the token.

/// Split the corpus into words.
///
/// # Arguments
///
/// * `content` - Corpus text
///
/// # Returns
///
/// Tokens in corpus order, borrowed from `content`
pub fn tokenize(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}
