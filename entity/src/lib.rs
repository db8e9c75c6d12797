//! SeaORM entity models for the score ledger, the materialized scoreboard and the team registry.

pub mod prelude;

pub mod results;
pub mod scoreboard;
pub mod team;
