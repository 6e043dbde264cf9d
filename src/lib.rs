#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_RESOLVER_CONFIG;
mod constants;
pub mod models;
pub use models::{
    CandidateScorer, CompanyIndex, CompanySymbolListPreprocessor, DirectMatcher, EntityRecord,
    Error, GenericTermFilter, NoMatchReason, OverrideRule, OverrideRuleEngine, Resolution,
    ResolutionOutcome, Resolver, ResolverConfig, ResolverHandle, TokenPredicate, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{
    AlternateCompanyName, CompanyName, CompanySymbolList, Score, TickerSymbol, Token, TokenRef,
};
pub use utils::sort_candidates;

#[cfg(feature = "embed-bytes")]
use std::sync::LazyLock;

// Compressed by the build script from `data/company_symbol_list.csv`
#[cfg(feature = "embed-bytes")]
const COMPRESSED_COMPANY_SYMBOL_LIST_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/company_symbol_list.csv.gz"));

#[cfg(feature = "embed-bytes")]
static EMBEDDED_RESOLVER: LazyLock<Result<Resolver, String>> = LazyLock::new(|| {
    load_embedded_company_symbol_list()
        .and_then(|company_symbol_list| {
            Resolver::from_company_symbol_list(DEFAULT_RESOLVER_CONFIG, &company_symbol_list)
        })
        .map_err(|err| err.to_string())
});

/// Decodes the catalog embedded in the library.
#[cfg(feature = "embed-bytes")]
pub fn load_embedded_company_symbol_list() -> Result<CompanySymbolList, Error> {
    CompanySymbolListPreprocessor::extract_company_symbol_list_from_bytes(
        COMPRESSED_COMPANY_SYMBOL_LIST_BYTES,
    )
}

/// The resolver over the embedded catalog, built on first use.
#[cfg(feature = "embed-bytes")]
pub fn embedded_resolver() -> Result<&'static Resolver, Error> {
    EMBEDDED_RESOLVER
        .as_ref()
        .map_err(|err| Error::Other(err.clone()))
}

/// Resolves a free-text query against the embedded catalog.
///
/// Returns `Ok(None)` when the query has no confident match.
#[cfg(feature = "embed-bytes")]
pub fn resolve_ticker_symbol(query: &str) -> Result<Option<TickerSymbol>, Error> {
    Ok(embedded_resolver()?.resolve(query))
}

/// Resolves a free-text query against a caller-supplied catalog, using the default
/// override rules.
///
/// The index is built for this call only; hold a `Resolver` (or a `ResolverHandle`)
/// to resolve many queries against the same catalog.
pub fn resolve_ticker_symbol_with_custom_config(
    query: &str,
    company_symbol_list: &CompanySymbolList,
    resolver_config: &ResolverConfig,
) -> Result<Option<TickerSymbol>, Error> {
    let resolver = Resolver::from_company_symbol_list(resolver_config, company_symbol_list)?;

    Ok(resolver.resolve(query))
}
