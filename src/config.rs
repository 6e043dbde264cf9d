use crate::models::ResolverConfig;

pub const DEFAULT_RESOLVER_CONFIG: &ResolverConfig = &ResolverConfig {
    single_token_min_score: 45,
    multi_token_min_score: 35,
    ambiguity_ratio: 0.7,
    diagnostic_candidate_limit: 5,
};
