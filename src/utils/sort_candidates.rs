use crate::types::{CandidateScoreMap, Score, TickerSymbol};

/// Sorts a mapping of ticker symbols to candidate scores.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by score in descending order (higher score first).
/// - **Secondary:** If two symbols have the same score, sorts by ticker
///   symbol in ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use std::collections::HashSet;
/// use ticker_resolver::types::CandidateScoreMap;
/// use ticker_resolver::sort_candidates;
///
/// let mut candidate_scores = CandidateScoreMap::new();
/// candidate_scores.insert("INFY".to_string(), (40, HashSet::new()));
/// candidate_scores.insert("TCS".to_string(), (55, HashSet::new()));
/// candidate_scores.insert("HCLTECH".to_string(), (40, HashSet::new()));
///
/// let sorted = sort_candidates(&candidate_scores);
/// assert_eq!(sorted, vec![
///     ("TCS".to_string(), 55),
///     ("HCLTECH".to_string(), 40),
///     ("INFY".to_string(), 40)
/// ]);
/// ```
pub fn sort_candidates(candidate_scores: &CandidateScoreMap) -> Vec<(TickerSymbol, Score)> {
    let mut sorted_candidates: Vec<(TickerSymbol, Score)> = candidate_scores
        .iter()
        .map(|(ticker_symbol, (score, _))| (ticker_symbol.to_owned(), *score))
        .collect();

    sorted_candidates.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by score (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by ticker symbol (ascending)
    });

    sorted_candidates
}
