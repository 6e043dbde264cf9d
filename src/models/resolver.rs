use crate::types::{CompanySymbolList, Score, TickerSymbol, Token};
use crate::utils::sort_candidates;
use crate::{
    CandidateScorer, CompanyIndex, DirectMatcher, Error, GenericTermFilter, OverrideRuleEngine,
    Tokenizer,
};

use log::{debug, info};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Minimum best score accepted when the query has exactly one meaningful token.
    pub single_token_min_score: Score,
    /// Minimum best score accepted for queries with more than one distinct meaningful token.
    pub multi_token_min_score: Score,
    /// The runner-up must score below `best * ambiguity_ratio` for a match to be accepted.
    pub ambiguity_ratio: f32,
    /// Number of top candidates kept in a `Resolution`.
    pub diagnostic_candidate_limit: usize,
}

/// Why a query did not resolve to a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchReason {
    NoMeaningfulTokens,
    InvalidQuery,
    NoCandidates,
    BelowThreshold,
    /// Every query token is a generic business word (`bank`, `ltd`, ...) and no
    /// candidate passed on its own.
    GenericOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// A query token is literally a catalog symbol.
    DirectMatch(TickerSymbol),
    /// The best scored candidate passed the threshold and the ambiguity check.
    Resolved(TickerSymbol),
    NoMatch(NoMatchReason),
    /// The top two candidates are too close to call.
    Ambiguous,
}

impl ResolutionOutcome {
    pub fn ticker_symbol(&self) -> Option<&TickerSymbol> {
        match self {
            ResolutionOutcome::DirectMatch(ticker_symbol)
            | ResolutionOutcome::Resolved(ticker_symbol) => Some(ticker_symbol),
            ResolutionOutcome::NoMatch(_) | ResolutionOutcome::Ambiguous => None,
        }
    }
}

/// Diagnostic view of a single resolution call.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Meaningful query tokens, in query order.
    pub tokens: Vec<Token>,
    pub outcome: ResolutionOutcome,
    /// Top final candidates, sorted by score (descending) then symbol.
    pub candidates: Vec<(TickerSymbol, Score)>,
}

impl Resolution {
    fn new(tokens: Vec<Token>, outcome: ResolutionOutcome) -> Self {
        Self {
            tokens,
            outcome,
            candidates: Vec::new(),
        }
    }

    pub fn ticker_symbol(&self) -> Option<&TickerSymbol> {
        self.outcome.ticker_symbol()
    }
}

/// Resolves free-text queries to at most one ticker symbol.
///
/// A `Resolver` is immutable once built and may be shared across threads; every call
/// works on call-local state only.
pub struct Resolver {
    config: ResolverConfig,
    company_index: CompanyIndex,
    override_rule_engine: OverrideRuleEngine,
    query_tokenizer: Tokenizer,
    generic_term_filter: GenericTermFilter,
}

impl Resolver {
    /// Builds a resolver over the given catalog and override rule table.
    ///
    /// # Errors
    /// Returns `Error::EmptyCatalog` or `Error::DuplicateSymbol` if the catalog
    /// cannot be indexed.
    pub fn new(
        config: &ResolverConfig,
        company_symbol_list: &CompanySymbolList,
        override_rule_engine: OverrideRuleEngine,
    ) -> Result<Self, Error> {
        info!("Building company index...");
        let company_index = CompanyIndex::new(company_symbol_list)?;

        Ok(Self {
            config: *config,
            company_index,
            override_rule_engine,
            query_tokenizer: Tokenizer::query_parser(),
            generic_term_filter: GenericTermFilter::new(),
        })
    }

    /// Builds a resolver which uses the embedded default override rules.
    pub fn from_company_symbol_list(
        config: &ResolverConfig,
        company_symbol_list: &CompanySymbolList,
    ) -> Result<Self, Error> {
        Self::new(
            config,
            company_symbol_list,
            OverrideRuleEngine::from_default_rules()?,
        )
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn company_index(&self) -> &CompanyIndex {
        &self.company_index
    }

    pub fn override_rule_engine(&self) -> &OverrideRuleEngine {
        &self.override_rule_engine
    }

    /// Resolves a query to a ticker symbol, or `None` when there is no confident match.
    pub fn resolve(&self, query: &str) -> Option<TickerSymbol> {
        self.resolve_with_diagnostics(query)
            .ticker_symbol()
            .cloned()
    }

    /// Resolves a query and reports how the decision was reached.
    pub fn resolve_with_diagnostics(&self, query: &str) -> Resolution {
        info!("Tokenizing...");
        let query_tokens = self.query_tokenizer.tokenize(query);

        if query_tokens.is_empty() {
            debug!("No meaningful tokens in query: {:?}", query);
            return Resolution::new(
                query_tokens,
                ResolutionOutcome::NoMatch(NoMatchReason::NoMeaningfulTokens),
            );
        }

        info!("Checking for direct symbol matches...");
        if let Some(ticker_symbol) =
            DirectMatcher::new(&self.company_index).find_symbol(&query_tokens)
        {
            let outcome = ResolutionOutcome::DirectMatch(ticker_symbol.clone());
            return Resolution::new(query_tokens, outcome);
        }

        if self.generic_term_filter.is_invalid_query(&query_tokens) {
            debug!("Rejecting invalid query tokens: {:?}", query_tokens);
            return Resolution::new(
                query_tokens,
                ResolutionOutcome::NoMatch(NoMatchReason::InvalidQuery),
            );
        }

        info!("Scoring candidates...");
        let mut candidate_scores = CandidateScorer::new(&self.company_index).score(&query_tokens);

        info!("Applying override rules...");
        self.override_rule_engine
            .apply(&self.company_index, &query_tokens, &mut candidate_scores);

        info!("Applying generic term penalties...");
        let penalized_symbols = self.generic_term_filter.apply(&mut candidate_scores);
        if !penalized_symbols.is_empty() {
            debug!("Generic-only candidates: {:?}", penalized_symbols);
        }

        candidate_scores.retain(|_, (score, _)| *score > 0);

        let mut sorted_candidates = sort_candidates(&candidate_scores);

        // A repeated token does not make a query multi-token
        let distinct_token_count = query_tokens.iter().collect::<HashSet<_>>().len();

        let outcome = match self.decide(distinct_token_count, &sorted_candidates) {
            ResolutionOutcome::NoMatch(NoMatchReason::NoCandidates | NoMatchReason::BelowThreshold)
                if self.generic_term_filter.is_generic_only_query(&query_tokens) =>
            {
                ResolutionOutcome::NoMatch(NoMatchReason::GenericOnly)
            }
            outcome => outcome,
        };

        debug!(
            "Query {:?} -> {:?}, top candidates: {:?}",
            query_tokens,
            outcome,
            sorted_candidates
                .iter()
                .take(self.config.diagnostic_candidate_limit)
                .collect::<Vec<_>>()
        );

        sorted_candidates.truncate(self.config.diagnostic_candidate_limit);

        Resolution {
            tokens: query_tokens,
            outcome,
            candidates: sorted_candidates,
        }
    }

    /// Applies the acceptance threshold and the ambiguity check to sorted candidates.
    fn decide(
        &self,
        query_token_count: usize,
        sorted_candidates: &[(TickerSymbol, Score)],
    ) -> ResolutionOutcome {
        let Some((best_symbol, best_score)) = sorted_candidates.first() else {
            return ResolutionOutcome::NoMatch(NoMatchReason::NoCandidates);
        };

        let second_score = sorted_candidates
            .get(1)
            .map(|(_, score)| *score)
            .unwrap_or(0);

        if *best_score < self.min_score_for(query_token_count) {
            return ResolutionOutcome::NoMatch(NoMatchReason::BelowThreshold);
        }

        if second_score as f32 >= *best_score as f32 * self.config.ambiguity_ratio {
            return ResolutionOutcome::Ambiguous;
        }

        ResolutionOutcome::Resolved(best_symbol.clone())
    }

    fn min_score_for(&self, query_token_count: usize) -> Score {
        if query_token_count == 1 {
            self.config.single_token_min_score
        } else {
            self.config.multi_token_min_score
        }
    }
}
