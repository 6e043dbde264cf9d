pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const TEST_SYMBOLS_CSV_PATH: &str = "tests/test_data_files/test_symbols.csv";

/// Marker for the expected symbol line in a test file. An empty value expects no match.
pub const EXPECTED_PREFIX: &str = "EXPECTED:";

pub const COMMENT_PREFIX: &str = "COMMENT:";
