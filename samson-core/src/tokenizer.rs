//! Whitespace tokenizer.
//!
//! A token is any maximal run of non-separator characters. Separators are
//! whitespace (per [`char::is_whitespace`]) plus the ASCII information
//! separators U+001C..=U+001F, so the end-of-message code point (RS) can
//! never end up inside a word.

use crate::types::Token;

/// Whether `c` splits words.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Iterate over the words of `text` as borrowed slices, left to right.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|w| !w.is_empty())
}

/// Break a message into word tokens.
///
/// Empty or all-separator input yields an empty vector.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    words(text).map(Token::from).collect()
}
