#[path = "constants.rs"]
pub mod constants;
