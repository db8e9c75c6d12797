//! Data access layer.
//!
//! This module contains the store session and the repositories over the three tables the
//! scoring core uses: the append-only `results` ledger, the rebuildable `scoreboard` view and
//! the read-only `team` registry. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! callers can run them inside a transaction when several operations must commit together.

pub mod results;
pub mod scoreboard;
pub mod session;
pub mod team;
