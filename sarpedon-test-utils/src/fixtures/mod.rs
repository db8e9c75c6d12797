//! Test fixture modules for database records.
//!
//! - `results` - raw ledger rows, including malformed documents
//! - `team` - team registry records

pub mod results;
pub mod team;
