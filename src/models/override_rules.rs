use std::collections::HashSet;
use std::io::Cursor;

use crate::types::{CandidateScoreMap, Score, TickerSymbol, Token, TokenRef};
use crate::utils::get_csv_column_index;
use crate::{CompanyIndex, Error, Tokenizer};

use csv::ReaderBuilder;
use log::debug;

/// Trigger condition of an override rule, evaluated against the full query token set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenPredicate {
    /// Every one of these tokens must be present.
    pub all_of: Vec<Token>,
    /// At least one of these tokens must be present (ignored when empty).
    pub any_of: Vec<Token>,
    /// None of these tokens may be present.
    pub none_of: Vec<Token>,
}

impl TokenPredicate {
    pub fn matches(&self, query_token_set: &HashSet<&TokenRef>) -> bool {
        self.all_of
            .iter()
            .all(|token| query_token_set.contains(token.as_str()))
            && (self.any_of.is_empty()
                || self
                    .any_of
                    .iter()
                    .any(|token| query_token_set.contains(token.as_str())))
            && !self
                .none_of
                .iter()
                .any(|token| query_token_set.contains(token.as_str()))
    }

    /// The positive tokens of the predicate which are present in the query.
    fn matched_tokens(&self, query_token_set: &HashSet<&TokenRef>) -> Vec<Token> {
        self.all_of
            .iter()
            .chain(self.any_of.iter())
            .filter(|token| query_token_set.contains(token.as_str()))
            .cloned()
            .collect()
    }
}

/// A hand-authored score adjustment for a known ambiguous entity family.
///
/// A negative `delta` penalizes `target_symbol`, typically a competitor sharing a
/// brand root with the intended entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRule {
    pub label: String,
    pub trigger: TokenPredicate,
    pub target_symbol: TickerSymbol,
    pub delta: Score,
}

impl OverrideRule {
    /// Checks that the rule can ever fire and actually changes a score.
    pub fn validate(&self) -> Result<(), Error> {
        if self.trigger.all_of.is_empty() && self.trigger.any_of.is_empty() {
            return Err(Error::InvalidOverrideRule(format!(
                "{}: trigger needs at least one required token",
                self.label
            )));
        }

        if self.target_symbol.trim().is_empty() {
            return Err(Error::InvalidOverrideRule(format!(
                "{}: missing target symbol",
                self.label
            )));
        }

        if self.delta == 0 {
            return Err(Error::InvalidOverrideRule(format!(
                "{}: delta must not be zero",
                self.label
            )));
        }

        Ok(())
    }
}

/// Default disambiguation table for the embedded catalog.
pub const DEFAULT_OVERRIDE_RULES_CSV: &str = include_str!("../../data/override_rules.csv");

/// Applies a fixed table of `OverrideRule`s to candidate scores.
///
/// Every rule is evaluated against the same token set and its delta is added
/// independently, so the outcome does not depend on rule order.
#[derive(Debug, Clone, Default)]
pub struct OverrideRuleEngine {
    rules: Vec<OverrideRule>,
}

impl OverrideRuleEngine {
    /// Creates an engine from an explicit list of rules.
    ///
    /// # Errors
    /// Returns `Error::InvalidOverrideRule` for the first rule that fails validation.
    pub fn new(rules: Vec<OverrideRule>) -> Result<Self, Error> {
        let rules = rules
            .into_iter()
            .map(|rule| {
                rule.validate()?;
                Ok(OverrideRule {
                    target_symbol: rule.target_symbol.trim().to_uppercase(),
                    ..rule
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self { rules })
    }

    /// An engine with no rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an engine from the embedded default rule table.
    pub fn from_default_rules() -> Result<Self, Error> {
        Self::from_csv_str(DEFAULT_OVERRIDE_RULES_CSV)
    }

    /// Parses a rule table from a CSV-formatted string.
    ///
    /// # Notes
    ///
    /// Expected column headers:
    /// - `Label`: Human-readable rule name.
    /// - `All Of`, `Any Of`, `None Of`: Space-separated trigger tokens (may be empty).
    /// - `Target Symbol`: The ticker symbol whose score is adjusted.
    /// - `Delta`: Signed integer score adjustment.
    ///
    /// Trigger tokens are normalized like query tokens, without stop-word removal.
    pub fn from_csv_str(csv_str: &str) -> Result<Self, Error> {
        let token_tokenizer = Tokenizer::company_name_parser();

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(csv_str));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let label_index = get_csv_column_index(&headers, "Label")?;
        let all_of_index = get_csv_column_index(&headers, "All Of")?;
        let any_of_index = get_csv_column_index(&headers, "Any Of")?;
        let none_of_index = get_csv_column_index(&headers, "None Of")?;
        let target_index = get_csv_column_index(&headers, "Target Symbol")?;
        let delta_index = get_csv_column_index(&headers, "Delta")?;

        let mut rules = Vec::new();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let field = |index: usize| record.get(index).unwrap_or_default();

            let label = field(label_index).to_string();
            let delta = field(delta_index).parse::<Score>().map_err(|e| {
                Error::InvalidOverrideRule(format!("{}: invalid delta: {}", label, e))
            })?;

            rules.push(OverrideRule {
                trigger: TokenPredicate {
                    all_of: token_tokenizer.tokenize(field(all_of_index)),
                    any_of: token_tokenizer.tokenize(field(any_of_index)),
                    none_of: token_tokenizer.tokenize(field(none_of_index)),
                },
                target_symbol: field(target_index).to_string(),
                delta,
                label,
            });
        }

        Self::new(rules)
    }

    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    /// Adds the delta of every triggered rule to its target's score.
    ///
    /// Targets missing from the catalog are skipped. A target with no score yet
    /// becomes a candidate; a positive delta also adds the triggering tokens to the
    /// target's match basis.
    ///
    /// # Returns
    /// * The rules which fired, in table order.
    pub fn apply(
        &self,
        company_index: &CompanyIndex,
        query_tokens: &[Token],
        candidate_scores: &mut CandidateScoreMap,
    ) -> Vec<&OverrideRule> {
        let query_token_set: HashSet<&TokenRef> =
            query_tokens.iter().map(|token| token.as_str()).collect();

        let mut fired_rules = Vec::new();

        for rule in &self.rules {
            if !rule.trigger.matches(&query_token_set) {
                continue;
            }

            if !company_index.contains_symbol(&rule.target_symbol) {
                debug!(
                    "Override rule '{}' targets unknown symbol {}; skipping",
                    rule.label, rule.target_symbol
                );
                continue;
            }

            let (score, match_basis) = candidate_scores
                .entry(rule.target_symbol.clone())
                .or_insert_with(|| (0, HashSet::new()));

            *score += rule.delta;

            if rule.delta > 0 {
                match_basis.extend(rule.trigger.matched_tokens(&query_token_set));
            }

            debug!(
                "Override rule '{}' fired: {} {:+}",
                rule.label, rule.target_symbol, rule.delta
            );

            fired_rules.push(rule);
        }

        fired_rules
    }
}
