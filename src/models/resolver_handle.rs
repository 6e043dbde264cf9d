use std::sync::{Arc, RwLock};

use crate::types::{CompanySymbolList, TickerSymbol};
use crate::{Error, OverrideRuleEngine, Resolver, ResolverConfig};

use log::info;

/// Shares a `Resolver` snapshot between threads and allows swapping it for a newly
/// built one.
///
/// Callers take a snapshot and resolve against it without holding the lock; a reload
/// never affects a snapshot that is already in use.
pub struct ResolverHandle {
    current: RwLock<Arc<Resolver>>,
}

impl ResolverHandle {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            current: RwLock::new(Arc::new(resolver)),
        }
    }

    /// Returns the currently active resolver.
    pub fn snapshot(&self) -> Result<Arc<Resolver>, Error> {
        let current = self
            .current
            .read()
            .map_err(|e| Error::Other(format!("Lock: {}", e)))?;

        Ok(Arc::clone(&current))
    }

    /// Resolves a query against the current snapshot.
    pub fn resolve(&self, query: &str) -> Result<Option<TickerSymbol>, Error> {
        Ok(self.snapshot()?.resolve(query))
    }

    /// Makes `resolver` the active snapshot.
    pub fn replace(&self, resolver: Resolver) -> Result<(), Error> {
        let resolver = Arc::new(resolver);

        let mut current = self
            .current
            .write()
            .map_err(|e| Error::Other(format!("Lock: {}", e)))?;

        *current = resolver;

        Ok(())
    }

    /// Rebuilds the resolver from a new catalog, keeping the active config and rules.
    ///
    /// The new index is built before the lock is taken; if the build fails the
    /// previous snapshot stays active.
    pub fn reload(&self, company_symbol_list: &CompanySymbolList) -> Result<(), Error> {
        let previous = self.snapshot()?;

        let override_rule_engine: OverrideRuleEngine = previous.override_rule_engine().clone();
        let config: ResolverConfig = *previous.config();

        let resolver = Resolver::new(&config, company_symbol_list, override_rule_engine)?;

        info!(
            "Reloaded catalog with {} records",
            resolver.company_index().record_count()
        );

        self.replace(resolver)
    }
}
