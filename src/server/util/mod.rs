//! Utility functions shared across the server modules.

pub mod time;
