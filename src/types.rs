use std::collections::{HashMap, HashSet};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Query tokens are lowercase.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents a ticker symbol (e.g., stock ticker) as an owned, uppercased `String`.
pub type TickerSymbol = String;

/// Represents the name of a company as an owned `String`.
pub type CompanyName = String;

/// Represents an alternate name for a company as an owned `String`. These are used to match
/// aliases, abbreviations and brand names of a company.
pub type AlternateCompanyName = String;

/// A list of company symbols, where each entry includes:
/// - `TickerSymbol`: The company's stock ticker.
/// - `Option<CompanyName>`: The company's primary name (optional if not available).
/// - `Vec<AlternateCompanyName>`: A list of alternate names or aliases for the company.
pub type CompanySymbolList = Vec<(TickerSymbol, Option<CompanyName>, Vec<AlternateCompanyName>)>;

/// Position of an `EntityRecord` within the catalog.
pub type RecordIndex = usize;

/// A signed candidate score. Override rules and penalties may push it below zero, in
/// which case the candidate is discarded.
pub type Score = i32;

/// The query tokens which contributed to a candidate's score.
pub type MatchBasis = HashSet<Token>;

/// Per-call accumulator of candidate scores, keyed by ticker symbol.
pub type CandidateScoreMap = HashMap<TickerSymbol, (Score, MatchBasis)>;
