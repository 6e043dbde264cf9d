pub mod candidate_scorer;
pub use candidate_scorer::CandidateScorer;

pub mod company_index;
pub use company_index::CompanyIndex;

pub mod company_symbol_list_preprocessor;
pub use company_symbol_list_preprocessor::CompanySymbolListPreprocessor;

pub mod direct_matcher;
pub use direct_matcher::DirectMatcher;

pub mod entity_record;
pub use entity_record::EntityRecord;

pub mod error;
pub use error::Error;

pub mod generic_term_filter;
pub use generic_term_filter::GenericTermFilter;

pub mod override_rules;
pub use override_rules::{OverrideRule, OverrideRuleEngine, TokenPredicate};

pub mod resolver;
pub use resolver::{NoMatchReason, Resolution, ResolutionOutcome, Resolver, ResolverConfig};

pub mod resolver_handle;
pub use resolver_handle::ResolverHandle;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
