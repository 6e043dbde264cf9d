use crate::types::CompanySymbolList;
use crate::utils::get_csv_column_index;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::io::Cursor;
use std::io::Read;

pub struct CompanySymbolListPreprocessor {}

impl CompanySymbolListPreprocessor {
    /// Parses a catalog from a CSV-formatted string.
    ///
    /// Expected column headers: `Symbol`, `Company Name`, `Alternate Names`. Alternate
    /// names are comma-separated inside their (quoted) cell; an empty company name is
    /// read as missing.
    pub fn read_company_symbol_list_from_string(csv: &str) -> Result<CompanySymbolList, Error> {
        let mut company_symbol_list = CompanySymbolList::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let symbol_index = get_csv_column_index(&headers, "Symbol")?;
        let company_name_index = get_csv_column_index(&headers, "Company Name")?;
        let alternate_names_index = get_csv_column_index(&headers, "Alternate Names")?;

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let symbol = record
                .get(symbol_index)
                .map(|symbol| symbol.trim())
                .filter(|symbol| !symbol.is_empty())
                .ok_or_else(|| Error::ParserError("Missing 'Symbol' field".to_string()))?;

            let company_name = record
                .get(company_name_index)
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(|name| name.to_string());

            let alternate_names: Vec<String> = record
                .get(alternate_names_index)
                .map(|names| {
                    names
                        .split(',')
                        .map(|name| name.trim())
                        .filter(|name| !name.is_empty())
                        .map(|name| name.to_string())
                        .collect()
                })
                .unwrap_or_default();

            company_symbol_list.push((symbol.to_uppercase(), company_name, alternate_names));
        }

        Ok(company_symbol_list)
    }

    /// Decompress and parse the company symbol list from Gzip-compressed CSV bytes
    pub fn extract_company_symbol_list_from_bytes(
        read_bytes: &[u8],
    ) -> Result<CompanySymbolList, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        let company_symbol_list = Self::read_company_symbol_list_from_string(&decompressed_data)?;
        Ok(company_symbol_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV: &str = "Symbol,Company Name,Alternate Names\n\
        sbin,State Bank of India,\"SBI, State Bank\"\n\
        ITC,ITC Ltd,\n\
        NONAME,,\n";

    #[test]
    fn test_read_company_symbol_list_from_string() {
        let list = CompanySymbolListPreprocessor::read_company_symbol_list_from_string(CSV).unwrap();

        assert_eq!(
            list,
            vec![
                (
                    "SBIN".to_string(),
                    Some("State Bank of India".to_string()),
                    vec!["SBI".to_string(), "State Bank".to_string()]
                ),
                ("ITC".to_string(), Some("ITC Ltd".to_string()), vec![]),
                ("NONAME".to_string(), None, vec![]),
            ]
        );
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let result = CompanySymbolListPreprocessor::read_company_symbol_list_from_string(
            "Symbol,Company Name\nITC,ITC Ltd\n",
        );

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_empty_symbol_is_an_error() {
        let result = CompanySymbolListPreprocessor::read_company_symbol_list_from_string(
            "Symbol,Company Name,Alternate Names\n ,Nameless Ltd,\n",
        );

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_extract_company_symbol_list_from_bytes() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let list =
            CompanySymbolListPreprocessor::extract_company_symbol_list_from_bytes(&compressed)
                .unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].0, "SBIN");
    }

    #[test]
    fn test_invalid_gzip_is_an_io_error() {
        let result =
            CompanySymbolListPreprocessor::extract_company_symbol_list_from_bytes(b"not gzip");

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
