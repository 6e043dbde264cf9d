use std::collections::HashMap;

use crate::types::{CompanySymbolList, RecordIndex, TickerSymbol, TokenRef};
use crate::{EntityRecord, Error, Tokenizer};

use log::info;

/// Immutable catalog of company records together with the indexes derived from it.
///
/// Built once from a `CompanySymbolList`; there is no way to mutate it afterwards.
/// A catalog reload builds a new `CompanyIndex` instead.
#[derive(Debug)]
pub struct CompanyIndex {
    records: Vec<EntityRecord>,
    ticker_symbol_map: HashMap<TickerSymbol, RecordIndex>,
    // Symbols written with punctuation (`BAJAJ-AUTO`) keyed by their stripped form (`BAJAJAUTO`)
    stripped_symbol_map: HashMap<TickerSymbol, RecordIndex>,
    company_reverse_term_map: HashMap<String, Vec<RecordIndex>>,
}

impl CompanyIndex {
    /// Creates a new `CompanyIndex` by processing the provided company symbol list.
    ///
    /// # Arguments
    /// * `company_symbol_list` - A reference to the list of company symbols.
    ///
    /// # Errors
    /// * `Error::EmptyCatalog` if the list has no entries.
    /// * `Error::DuplicateSymbol` if two entries share a ticker symbol (compared
    ///   case-insensitively). Neither entry is dropped silently.
    pub fn new(company_symbol_list: &CompanySymbolList) -> Result<Self, Error> {
        if company_symbol_list.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let name_tokenizer = Tokenizer::company_name_parser();

        let mut instance = CompanyIndex {
            records: Vec::with_capacity(company_symbol_list.len()),
            ticker_symbol_map: HashMap::with_capacity(company_symbol_list.len()),
            stripped_symbol_map: HashMap::new(),
            company_reverse_term_map: HashMap::new(),
        };

        for (ticker_symbol, company_name, alt_company_names) in company_symbol_list {
            let record = EntityRecord::new(
                &name_tokenizer,
                ticker_symbol,
                company_name.as_ref(),
                alt_company_names,
            );

            instance.ingest_record(record)?;
        }

        instance.index_stripped_symbols(&name_tokenizer);

        info!(
            "Indexed {} company records with {} search terms",
            instance.records.len(),
            instance.company_reverse_term_map.len()
        );

        Ok(instance)
    }

    /// Adds a record to the catalog, the symbol map and the reverse term map.
    fn ingest_record(&mut self, record: EntityRecord) -> Result<(), Error> {
        if record.symbol.is_empty() {
            return Err(Error::ParserError(format!(
                "Empty ticker symbol for company: {}",
                record.display_name
            )));
        }

        if self.ticker_symbol_map.contains_key(&record.symbol) {
            return Err(Error::DuplicateSymbol(record.symbol));
        }

        let record_index = self.records.len();

        self.ticker_symbol_map
            .insert(record.symbol.clone(), record_index);

        // Search terms are de-duplicated per record, so each bucket holds a record once
        for term in &record.search_terms {
            self.company_reverse_term_map
                .entry(term.clone())
                .or_default()
                .push(record_index);
        }

        self.records.push(record);

        Ok(())
    }

    /// Keys each symbol containing punctuation by the form a query token takes after
    /// tokenization, so `bajaj-auto` finds `BAJAJ-AUTO`.
    ///
    /// Runs after every record is ingested: a stripped form never shadows a real
    /// symbol, and when two symbols strip to the same form the first in catalog
    /// order keeps it.
    fn index_stripped_symbols(&mut self, name_tokenizer: &Tokenizer) {
        for (record_index, record) in self.records.iter().enumerate() {
            let stripped_symbol = name_tokenizer.tokenize(&record.symbol).concat().to_uppercase();

            if stripped_symbol.is_empty()
                || stripped_symbol == record.symbol
                || self.ticker_symbol_map.contains_key(&stripped_symbol)
            {
                continue;
            }

            self.stripped_symbol_map
                .entry(stripped_symbol)
                .or_insert(record_index);
        }
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    /// Gets a record by its position in the catalog.
    pub fn get_record(&self, record_index: RecordIndex) -> Option<&EntityRecord> {
        self.records.get(record_index)
    }

    /// Looks up a record by ticker symbol. The lookup is case-insensitive, and a
    /// symbol containing punctuation is also found by its stripped form.
    pub fn get_record_by_symbol(&self, ticker_symbol: &TokenRef) -> Option<&EntityRecord> {
        let ticker_symbol = ticker_symbol.to_uppercase();

        self.ticker_symbol_map
            .get(&ticker_symbol)
            .or_else(|| self.stripped_symbol_map.get(&ticker_symbol))
            .and_then(|&record_index| self.records.get(record_index))
    }

    /// Whether the catalog contains the given symbol.
    pub fn contains_symbol(&self, ticker_symbol: &TokenRef) -> bool {
        self.get_record_by_symbol(ticker_symbol).is_some()
    }

    /// Gets the positions of the records whose search terms contain `term`, in catalog order.
    pub fn get_term_record_indices(&self, term: &TokenRef) -> Option<&[RecordIndex]> {
        self.company_reverse_term_map
            .get(term)
            .map(|record_indices| record_indices.as_slice())
    }

    /// Total number of records in the catalog.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Total number of distinct search terms in the reverse term map.
    pub fn term_count(&self) -> usize {
        self.company_reverse_term_map.len()
    }
}
