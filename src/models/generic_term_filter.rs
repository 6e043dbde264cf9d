use std::collections::HashSet;

use crate::constants::{
    GENERIC_ONLY_PENALTY, GENERIC_TERMS, MAX_SHORT_TOKEN_LENGTH, PLACEHOLDER_TOKENS,
    SHORT_TICKER_ALLOWLIST,
};
use crate::types::{CandidateScoreMap, MatchBasis, TickerSymbol, Token, TokenRef};

/// Recognizes queries and candidates which rest only on uninformative words.
pub struct GenericTermFilter {
    generic_terms: HashSet<&'static str>,
    placeholder_tokens: HashSet<&'static str>,
    short_ticker_allowlist: HashSet<&'static str>,
}

impl Default for GenericTermFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenericTermFilter {
    pub fn new() -> Self {
        Self {
            generic_terms: GENERIC_TERMS.iter().copied().collect(),
            placeholder_tokens: PLACEHOLDER_TOKENS.iter().copied().collect(),
            short_ticker_allowlist: SHORT_TICKER_ALLOWLIST.iter().copied().collect(),
        }
    }

    pub fn is_generic_term(&self, token: &TokenRef) -> bool {
        self.generic_terms.contains(token)
    }

    /// A query is generic-only when nothing is left after removing generic words.
    pub fn is_generic_only_query(&self, query_tokens: &[Token]) -> bool {
        query_tokens.iter().all(|token| self.is_generic_term(token))
    }

    /// A candidate is generic-only when no non-generic token contributed to its score.
    pub fn is_generic_only_basis(&self, match_basis: &MatchBasis) -> bool {
        match_basis.iter().all(|token| self.is_generic_term(token))
    }

    /// A query is invalid when every token is a placeholder or a short token which
    /// is not a known two-letter ticker.
    pub fn is_invalid_query(&self, query_tokens: &[Token]) -> bool {
        query_tokens.iter().all(|token| {
            self.placeholder_tokens.contains(token.as_str())
                || (token.chars().count() <= MAX_SHORT_TOKEN_LENGTH
                    && !self.short_ticker_allowlist.contains(token.as_str()))
        })
    }

    /// Applies the generic-only penalty, floored at zero.
    ///
    /// # Returns
    /// * The penalized symbols, sorted.
    pub fn apply(&self, candidate_scores: &mut CandidateScoreMap) -> Vec<TickerSymbol> {
        let mut penalized_symbols: Vec<TickerSymbol> = candidate_scores
            .iter_mut()
            .filter(|(_, (_, match_basis))| self.is_generic_only_basis(match_basis))
            .map(|(ticker_symbol, (score, _))| {
                *score = (*score - GENERIC_ONLY_PENALTY).max(0);
                ticker_symbol.clone()
            })
            .collect();

        penalized_symbols.sort();

        penalized_symbols
    }
}
