use log::{debug, error};
use std::io::{self, BufRead};
use ticker_resolver::embedded_resolver;

fn main() {
    // Initialize the logger
    env_logger::init();

    let resolver = match embedded_resolver() {
        Ok(resolver) => resolver,
        Err(e) => {
            error!("Failed to load the embedded catalog: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve one query per line of stdin
    for line in io::stdin().lock().lines() {
        let query = match line {
            Ok(query) => query,
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
        };

        if query.trim().is_empty() {
            continue;
        }

        let resolution = resolver.resolve_with_diagnostics(&query);

        debug!(
            "{:?}: tokens {:?}, outcome {:?}, candidates {:?}",
            query, resolution.tokens, resolution.outcome, resolution.candidates
        );

        match resolution.ticker_symbol() {
            Some(ticker_symbol) => println!("{}: {}", query, ticker_symbol),
            None => println!("{}: no match", query),
        }
    }
}
