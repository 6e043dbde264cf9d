pub mod get_csv_column_index;
pub use get_csv_column_index::get_csv_column_index;

pub mod sort_candidates;
pub use sort_candidates::sort_candidates;
