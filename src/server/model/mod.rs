//! Server application models and type definitions.
//!
//! This module contains the domain models shared by the ledger, the materializer and the
//! query services, the application state handed to commands and scheduled jobs, and type
//! aliases for the generated database entity models.

pub mod app;
pub mod db;
pub mod image;
pub mod score;
pub mod team;
