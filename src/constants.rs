use crate::types::Score;

/// Words which never carry entity information in a finance query.
pub const STOP_WORDS: &[&str] = &[
    // Pronouns
    "i", "me", "my", "mine", "we", "us", "our", "you", "your", "he", "him", "his", "she", "her",
    "its", "they", "them", "their", "this", "that", "these", "those",
    // Articles and conjunctions
    "a", "an", "the", "and", "or", "but", "so", "if", "then", "than",
    // Prepositions
    "of", "in", "on", "at", "to", "for", "from", "by", "with", "about", "into", "over", "under",
    "as", "per", "via",
    // Auxiliaries and question words
    "is", "are", "was", "were", "be", "been", "am", "do", "does", "did", "can", "could",
    "should", "would", "will", "shall", "may", "might", "must", "what", "which", "who", "how",
    "why", "when", "where", "any", "some", "all", "not", "no", "please", "tell", "know",
    "think", "good", "bad", "best", "worth", "right", "time", "much", "many",
    // Generic finance verbs and nouns
    "buy", "buying", "sell", "selling", "invest", "investing", "investment", "hold", "holding",
    "trade", "trading", "share", "shares", "stock", "stocks", "equity", "price", "prices",
    "target", "value", "rate", "analysis", "outlook", "news", "market", "markets", "portfolio",
    "returns", "return", "dividend", "nse", "bse",
    // Temporal words
    "now", "today", "tomorrow", "yesterday", "currently", "current", "week", "month", "year",
    "long", "short", "term",
    // Comparison words
    "better", "vs", "versus", "compare", "comparison", "against", "between",
];

/// Characters kept in a token besides alphanumerics.
pub const TOKEN_SYMBOL_WHITELIST: &[char] = &['&'];

/// Structurally uninformative business-suffix words.
pub const GENERIC_TERMS: &[&str] = &[
    "bank",
    "company",
    "limited",
    "corporation",
    "group",
    "industries",
    "ltd",
    "corp",
    "co",
    "inc",
];

/// Placeholder tokens which mark a query as invalid when nothing else is present.
pub const PLACEHOLDER_TOKENS: &[&str] = &[
    "test", "dummy", "random", "xyz", "sample", "example", "foo", "bar",
];

/// Two-letter tokens which are legitimate tickers and keep a short query valid.
pub const SHORT_TICKER_ALLOWLIST: &[&str] = &["lt", "ge", "hp", "bp"];

/// Tokens at or below this length only qualify for exact-match scoring.
pub const MAX_EXACT_ONLY_TOKEN_LENGTH: usize = 3;

/// Tokens at or below this length are "short" for query validity.
pub const MAX_SHORT_TOKEN_LENGTH: usize = 2;

// Scoring weights

/// Token is a key of the inverted index (applied to every record in the bucket).
pub const WEIGHT_INDEX_TERM_HIT: Score = 20;

/// Token equals one word of the normalized company name.
pub const WEIGHT_NAME_WORD_EXACT: Score = 15;

/// Token is a substring of the normalized company name.
pub const WEIGHT_NAME_SUBSTRING: Score = 8;

/// Token is a substring of the display name.
pub const WEIGHT_DISPLAY_NAME_SUBSTRING: Score = 5;

/// Token equals a search term.
pub const WEIGHT_SEARCH_TERM_EXACT: Score = 12;

/// Token contains, or is contained by, a different search term.
pub const WEIGHT_SEARCH_TERM_PARTIAL: Score = 2;

/// Bonus per additional distinct name word matched beyond the first.
pub const WEIGHT_MULTI_WORD_BONUS: Score = 10;

/// Penalty for candidates matched only through generic words.
pub const GENERIC_ONLY_PENALTY: Score = 30;
