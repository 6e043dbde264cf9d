use crate::Error;
use csv::StringRecord;

/// Finds the position of a named column in a CSV header row.
///
/// # Errors
/// Returns `Error::ParserError` if the column is not present.
pub fn get_csv_column_index(headers: &StringRecord, column_name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header.trim() == column_name)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", column_name)))
}
