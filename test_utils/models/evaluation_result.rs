use ticker_resolver::TickerSymbol;

#[derive(Debug)]
pub struct EvaluationResult {
    pub query: String,
    pub expected: Option<TickerSymbol>,
    pub actual: Option<TickerSymbol>,
}

impl EvaluationResult {
    pub fn new(query: &str, expected: Option<TickerSymbol>, actual: Option<TickerSymbol>) -> Self {
        Self {
            query: query.to_string(),
            expected,
            actual,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.expected == self.actual
    }

    /// A symbol was returned where none (or a different one) was expected.
    pub fn is_false_positive(&self) -> bool {
        self.actual.is_some() && self.expected != self.actual
    }

    /// No symbol was returned where one was expected.
    pub fn is_false_negative(&self) -> bool {
        self.actual.is_none() && self.expected.is_some()
    }
}
