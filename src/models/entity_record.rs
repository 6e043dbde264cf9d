use crate::types::{AlternateCompanyName, CompanyName, TickerSymbol, TokenRef};
use crate::Tokenizer;

/// A single company in the catalog, in the form the resolver scores against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub symbol: TickerSymbol,
    pub display_name: String,
    /// Lowercase, stripped words of the display name joined by single spaces.
    pub normalized_name: String,
    /// Name words, alternate names and their words. Ordered and de-duplicated.
    pub search_terms: Vec<String>,
    // Cached for the full-scan pass
    display_name_lowercase: String,
    normalized_name_words: Vec<String>,
}

impl EntityRecord {
    /// Builds a record from a catalog entry.
    ///
    /// A missing company name falls back to the symbol, so the record is still
    /// discoverable by its own name.
    pub fn new(
        name_tokenizer: &Tokenizer,
        ticker_symbol: &TokenRef,
        company_name: Option<&CompanyName>,
        alternate_names: &[AlternateCompanyName],
    ) -> Self {
        let symbol = ticker_symbol.trim().to_uppercase();

        let display_name = company_name
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(symbol.as_str())
            .to_string();

        let normalized_name_words = name_tokenizer.tokenize(&display_name);
        let normalized_name = normalized_name_words.join(" ");

        let mut search_terms: Vec<String> = Vec::new();
        let mut push_term = |term: String| {
            if term.chars().count() > 1 && !search_terms.contains(&term) {
                search_terms.push(term);
            }
        };

        for word in &normalized_name_words {
            push_term(word.clone());
        }

        let normalized_alternate_names: Vec<Vec<String>> = alternate_names
            .iter()
            .map(|alternate_name| name_tokenizer.tokenize(alternate_name))
            .filter(|words| !words.is_empty())
            .collect();

        for words in &normalized_alternate_names {
            push_term(words.join(" "));
        }

        for words in normalized_alternate_names {
            for word in words {
                push_term(word);
            }
        }

        Self {
            symbol,
            display_name_lowercase: display_name.to_lowercase(),
            display_name,
            normalized_name,
            search_terms,
            normalized_name_words,
        }
    }

    /// The lowercased display name, used for case-insensitive substring checks.
    pub fn display_name_lowercase(&self) -> &str {
        &self.display_name_lowercase
    }

    /// The individual words of the normalized name, in order (duplicates kept).
    pub fn normalized_name_words(&self) -> &[String] {
        &self.normalized_name_words
    }
}
