//! Export module for daybudget
//!
//! Writes session data to any `io::Write`:
//! - CSV: the expense ledger (spreadsheet-compatible)
//! - JSON: the full session snapshot, machine-readable
//! - YAML: the full session snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_snapshot_json, SessionSnapshot, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
