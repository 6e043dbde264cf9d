use ticker_resolver::resolve_ticker_symbol;

fn main() {
    env_logger::init();

    let queries = [
        "should I buy hdfc life shares now?",
        "Reliance",
        "what about sbi cards",
        "bank company limited",
    ];

    for query in queries {
        match resolve_ticker_symbol(query).unwrap() {
            Some(ticker_symbol) => println!("{:?} -> {}", query, ticker_symbol),
            None => println!("{:?} -> no match", query),
        }
    }
}
