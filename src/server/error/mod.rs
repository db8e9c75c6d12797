//! Error types for the Sarpedon server application.
//!
//! Store failures are kept in their own [`StoreError`] so repositories and the materializer can
//! surface them without knowing about configuration or scheduling. "No matching entry" is never
//! an error here: point lookups return `Ok(None)`.

pub mod config;
pub mod store;

use thiserror::Error;

use crate::server::error::{config::ConfigError, store::StoreError};

/// Main error type for the Sarpedon server application.
///
/// Aggregates the domain-specific error types and external library errors so services and the
/// command line can propagate everything with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Store error (connection, query or document decoding failures).
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// The team registry has no team with the given id or alias.
    #[error("No team registered with id or alias {0:?}")]
    TeamNotFound(String),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl From<sea_orm::DbErr> for Error {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::StoreError(StoreError::from(err))
    }
}
