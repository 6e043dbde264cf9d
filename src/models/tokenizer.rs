use crate::constants::{STOP_WORDS, TOKEN_SYMBOL_WHITELIST};
use crate::types::{Token, TokenRef};
use std::collections::HashSet;

/// A utility struct for tokenizing text, with configurable options for
/// processing free-text queries and company names.
pub struct Tokenizer {
    /// Tokens with fewer characters than this are discarded.
    min_token_length: usize,

    /// Preprocessed stop words for filtering tokens.
    pre_processed_stop_words: Option<HashSet<String>>,
}

impl Tokenizer {
    /// Creates a tokenizer configured for parsing user queries.
    ///
    /// Discards single-character tokens and stop words.
    pub fn query_parser() -> Self {
        Self {
            min_token_length: 2,
            pre_processed_stop_words: Some(Self::preprocess_stop_words()),
        }
    }

    /// Creates a tokenizer configured for parsing company names and aliases.
    ///
    /// Applies the same character normalization as the query parser but keeps every
    /// word, so catalog words and query tokens stay comparable.
    pub fn company_name_parser() -> Self {
        Self {
            min_token_length: 1,
            pre_processed_stop_words: None,
        }
    }

    /// Splits the input text into tokens based on the tokenizer's configuration.
    ///
    /// The text is lowercased and split on whitespace; each word is then stripped of
    /// every character other than alphanumerics and the whitelisted symbols.
    /// Token order is preserved, as are duplicates.
    ///
    /// # Arguments
    /// * `text` - The input text to tokenize.
    ///
    /// # Returns
    /// * A vector of lowercase tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let stop_words = self.pre_processed_stop_words.as_ref();

        text.to_lowercase()
            .split_whitespace()
            .map(Self::strip_word)
            // Skip short words and stop words
            .filter(|word| {
                word.chars().count() >= self.min_token_length
                    && stop_words.map_or(true, |sw| !sw.contains(word))
            })
            .collect()
    }

    /// Lowercases and normalizes whitespace, producing a single space-separated string.
    pub fn normalize(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }

    /// Removes every character which is neither alphanumeric nor whitelisted.
    fn strip_word(word: &TokenRef) -> Token {
        word.chars()
            .filter(|c| c.is_alphanumeric() || TOKEN_SYMBOL_WHITELIST.contains(c))
            .collect()
    }

    /// Preprocesses the stop words by stripping them the same way query words are stripped.
    ///
    /// # Returns
    /// * A `HashSet` containing the preprocessed stop words.
    fn preprocess_stop_words() -> HashSet<String> {
        STOP_WORDS
            .iter()
            .map(|word| Self::strip_word(&word.to_lowercase()))
            .collect()
    }
}
