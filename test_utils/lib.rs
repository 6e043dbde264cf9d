pub mod constants;
pub mod models;
pub use models::EvaluationResult;

use std::fs::{self, read_dir};
use std::path::{Path, PathBuf};
use ticker_resolver::{
    CompanySymbolList, CompanySymbolListPreprocessor, Resolver, TickerSymbol,
    DEFAULT_RESOLVER_CONFIG,
};

use constants::{COMMENT_PREFIX, EXPECTED_PREFIX, TEST_SYMBOLS_CSV_PATH};

/// Utility to load the test catalog for testing and benchmarking.
pub fn load_test_symbols() -> CompanySymbolList {
    let csv = fs::read_to_string(TEST_SYMBOLS_CSV_PATH).expect("Failed to read test symbols");

    CompanySymbolListPreprocessor::read_company_symbol_list_from_string(&csv)
        .expect("Failed to parse test symbols")
}

/// Builds a resolver over the test catalog with the default config and override rules.
pub fn build_test_resolver() -> Resolver {
    Resolver::from_company_symbol_list(DEFAULT_RESOLVER_CONFIG, &load_test_symbols())
        .expect("Failed to build test resolver")
}

/// Lists the files of a test directory in name order.
pub fn get_test_file_paths(test_dir: &str) -> Vec<PathBuf> {
    let mut file_paths: Vec<PathBuf> = read_dir(test_dir)
        .expect("Failed to read test files directory")
        .map(|entry| entry.expect("Failed to read file").path())
        .filter(|path| path.is_file())
        .collect();

    file_paths.sort();

    file_paths
}

// Helper function to get the expected ticker from the text file
pub fn get_expected_ticker(file_path: &Path) -> Option<TickerSymbol> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let expected_line = content
        .lines()
        .map(|line| line.trim())
        .find(|line| line.starts_with(EXPECTED_PREFIX))
        .unwrap_or_else(|| panic!("{} - Missing {} line", file_path.display(), EXPECTED_PREFIX));

    let expected = expected_line.replace(EXPECTED_PREFIX, "").trim().to_string();

    if expected.is_empty() {
        None
    } else {
        Some(expected)
    }
}

// Helper function to get the query, without the EXPECTED and COMMENT lines
pub fn get_query_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with(EXPECTED_PREFIX)
                && !line.trim_start().starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join(" ")
}

// Helper function to run the test for a single file
pub fn run_test_for_file(
    test_file_path: &Path,
    resolver: &Resolver,
    use_assertions: bool,
) -> EvaluationResult {
    let query = get_query_text(test_file_path);
    let expected = get_expected_ticker(test_file_path);

    eprintln!("Testing file: {}", test_file_path.display());

    let resolution = resolver.resolve_with_diagnostics(&query);

    let evaluation_result =
        EvaluationResult::new(&query, expected, resolution.ticker_symbol().cloned());

    if use_assertions {
        assert!(
            evaluation_result.is_pass(),
            "{} - Query {:?}: expected {:?}, but got {:?} (tokens: {:?}, candidates: {:?})",
            test_file_path.display(),
            evaluation_result.query,
            evaluation_result.expected,
            evaluation_result.actual,
            resolution.tokens,
            resolution.candidates
        );
    }

    evaluation_result
}
