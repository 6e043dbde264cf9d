use std::collections::HashSet;

use crate::constants::{
    MAX_EXACT_ONLY_TOKEN_LENGTH, WEIGHT_DISPLAY_NAME_SUBSTRING, WEIGHT_INDEX_TERM_HIT,
    WEIGHT_MULTI_WORD_BONUS, WEIGHT_NAME_SUBSTRING, WEIGHT_NAME_WORD_EXACT,
    WEIGHT_SEARCH_TERM_EXACT, WEIGHT_SEARCH_TERM_PARTIAL,
};
use crate::types::{CandidateScoreMap, Score, Token, TokenRef};
use crate::{CompanyIndex, EntityRecord};

/// Scores catalog records against a list of query tokens.
///
/// The scorer is stateless between calls; every call returns a fresh `CandidateScoreMap`.
pub struct CandidateScorer<'a> {
    company_index: &'a CompanyIndex,
}

impl<'a> CandidateScorer<'a> {
    pub fn new(company_index: &'a CompanyIndex) -> Self {
        Self { company_index }
    }

    /// Runs the index pass followed by the full-scan refinement pass.
    ///
    /// Records which gain no score are absent from the result.
    pub fn score(&self, query_tokens: &[Token]) -> CandidateScoreMap {
        let mut candidate_scores = CandidateScoreMap::new();

        self.apply_index_pass(query_tokens, &mut candidate_scores);
        self.apply_full_scan_pass(query_tokens, &mut candidate_scores);

        candidate_scores
    }

    /// Rewards every record in the inverted-index bucket of each token.
    fn apply_index_pass(&self, query_tokens: &[Token], candidate_scores: &mut CandidateScoreMap) {
        for token in query_tokens {
            let Some(record_indices) = self.company_index.get_term_record_indices(token) else {
                continue;
            };

            for &record_index in record_indices {
                if let Some(record) = self.company_index.get_record(record_index) {
                    Self::add_score(candidate_scores, record, token, WEIGHT_INDEX_TERM_HIT);
                }
            }
        }
    }

    fn apply_full_scan_pass(
        &self,
        query_tokens: &[Token],
        candidate_scores: &mut CandidateScoreMap,
    ) {
        for record in self.company_index.records() {
            let mut matched_name_words: HashSet<&TokenRef> = HashSet::new();

            for token in query_tokens {
                let token_score = Self::score_token(record, token);

                if record
                    .normalized_name_words()
                    .iter()
                    .any(|word| word == token)
                {
                    matched_name_words.insert(token.as_str());
                }

                if token_score > 0 {
                    Self::add_score(candidate_scores, record, token, token_score);
                }
            }

            let bonus = Self::calc_multi_word_bonus(matched_name_words.len());
            if bonus > 0 {
                if let Some((score, _)) = candidate_scores.get_mut(&record.symbol) {
                    *score += bonus;
                }
            }
        }
    }

    /// Full-scan score of a single token against a single record.
    ///
    /// Each criterion contributes at most once. Tokens of up to
    /// `MAX_EXACT_ONLY_TOKEN_LENGTH` characters only take part in exact matching.
    pub fn score_token(record: &EntityRecord, token: &TokenRef) -> Score {
        let allows_substring = token.chars().count() > MAX_EXACT_ONLY_TOKEN_LENGTH;
        let mut score = 0;

        if record.normalized_name_words().iter().any(|word| word == token) {
            score += WEIGHT_NAME_WORD_EXACT;
        }

        if allows_substring && record.normalized_name.contains(token) {
            score += WEIGHT_NAME_SUBSTRING;
        }

        if allows_substring && record.display_name_lowercase().contains(token) {
            score += WEIGHT_DISPLAY_NAME_SUBSTRING;
        }

        if record.search_terms.iter().any(|term| term == token) {
            score += WEIGHT_SEARCH_TERM_EXACT;
        }

        if allows_substring
            && record
                .search_terms
                .iter()
                .any(|term| term != token && (term.contains(token) || token.contains(term.as_str())))
        {
            score += WEIGHT_SEARCH_TERM_PARTIAL;
        }

        score
    }

    /// Bonus for matching more than one distinct word of a company name.
    pub fn calc_multi_word_bonus(matched_name_word_count: usize) -> Score {
        if matched_name_word_count > 1 {
            WEIGHT_MULTI_WORD_BONUS * (matched_name_word_count as Score - 1)
        } else {
            0
        }
    }

    fn add_score(
        candidate_scores: &mut CandidateScoreMap,
        record: &EntityRecord,
        token: &TokenRef,
        score: Score,
    ) {
        let (candidate_score, match_basis) = candidate_scores
            .entry(record.symbol.clone())
            .or_insert_with(|| (0, HashSet::new()));

        *candidate_score += score;
        match_basis.insert(token.to_string());
    }
}
