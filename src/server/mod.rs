//! Server application core modules.
//!
//! This module contains the store session, the ledger and scoreboard repositories, the
//! services that append, materialize and query scores, the periodic rebuild scheduler and
//! the configuration and startup glue that wires them together.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
