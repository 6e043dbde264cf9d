use crate::types::{TickerSymbol, Token};
use crate::CompanyIndex;

/// Short-circuits resolution when a query token is literally a ticker symbol.
pub struct DirectMatcher<'a> {
    company_index: &'a CompanyIndex,
}

impl<'a> DirectMatcher<'a> {
    pub fn new(company_index: &'a CompanyIndex) -> Self {
        Self { company_index }
    }

    /// Returns the symbol of the first token (in query order) which, uppercased,
    /// is a known ticker symbol.
    pub fn find_symbol(&self, query_tokens: &[Token]) -> Option<&'a TickerSymbol> {
        query_tokens.iter().find_map(|token| {
            self.company_index
                .get_record_by_symbol(token)
                .map(|record| &record.symbol)
        })
    }
}
