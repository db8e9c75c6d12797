//! Store session management.
//!
//! [`StoreSession`] owns the process-wide handle to the score store. Every service asks it for
//! a connection through [`StoreSession::ensure_connection`], which probes the current handle
//! and transparently replaces it when the probe fails.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::Mutex;

use crate::server::error::store::StoreError;

/// Lazily (re)established, shared connection to the score store.
///
/// Cloning a session is cheap and every clone shares the same underlying handle. The internal
/// lock is held only to read or swap the handle, never across a probe or a connect. When
/// several callers reconnect at once, the first to finish installs its handle and the others
/// adopt it, so the session never holds more than one live handle.
///
/// A replaced handle is never closed explicitly: callers that already hold a clone of it keep
/// using it until their operation completes or fails with a [`StoreError`] they can retry.
/// The underlying pool is released once the last clone is dropped.
#[derive(Clone)]
pub struct StoreSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    options: ConnectOptions,
    probe_interval: Duration,
    state: Mutex<SessionState>,
}

#[derive(Default)]
struct SessionState {
    conn: Option<DatabaseConnection>,
    verified_at: Option<Instant>,
    connected_at: Option<DateTime<Utc>>,
    /// Bumped whenever `conn` is replaced
    generation: u64,
}

impl StoreSession {
    /// Creates a session that connects on first use.
    ///
    /// # Arguments
    /// - `options` - Connection options used for every (re)connect
    /// - `probe_interval` - How long a successful liveness probe is trusted. `Duration::ZERO`
    ///   probes on every call.
    pub fn new(options: ConnectOptions, probe_interval: Duration) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                options,
                probe_interval,
                state: Mutex::new(SessionState::default()),
            }),
        }
    }

    /// Creates a session around an already established connection.
    ///
    /// The connection is probed on first use like any other; `options` are used if it has to
    /// be replaced.
    pub fn with_connection(
        conn: DatabaseConnection,
        options: ConnectOptions,
        probe_interval: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                options,
                probe_interval,
                state: Mutex::new(SessionState {
                    conn: Some(conn),
                    ..Default::default()
                }),
            }),
        }
    }

    /// Returns a usable store handle, reconnecting if the current one is missing or dead.
    ///
    /// A handle verified within the probe interval is returned as is. Otherwise a ping is
    /// issued; if it fails the old handle is discarded and a new connection is established.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - A handle that answered a probe or was just connected
    /// - `Err(StoreError::Connection)` - The store could not be reached
    pub async fn ensure_connection(&self) -> Result<DatabaseConnection, StoreError> {
        let (current, generation) = {
            let state = self.inner.state.lock().await;

            if let Some(conn) = &state.conn {
                let fresh = state
                    .verified_at
                    .is_some_and(|at| at.elapsed() < self.inner.probe_interval);
                if fresh {
                    return Ok(conn.clone());
                }
            }

            (state.conn.clone(), state.generation)
        };

        if let Some(conn) = current {
            match conn.ping().await {
                Ok(()) => {
                    let mut state = self.inner.state.lock().await;
                    if state.generation == generation {
                        state.verified_at = Some(Instant::now());
                    }
                    return Ok(conn);
                }
                Err(e) => {
                    tracing::warn!("Score store liveness probe failed, reconnecting: {}", e)
                }
            }
        }

        tracing::info!("Connecting to score store");

        let conn = Database::connect(self.inner.options.clone())
            .await
            .map_err(StoreError::Connection)?;

        let mut state = self.inner.state.lock().await;

        // Another caller replaced the handle while this one was connecting
        if state.generation != generation {
            if let Some(installed) = &state.conn {
                return Ok(installed.clone());
            }
        }

        state.conn = Some(conn.clone());
        state.generation += 1;
        state.verified_at = Some(Instant::now());
        state.connected_at = Some(Utc::now());

        Ok(conn)
    }

    /// Time of the last successful connect, if this session has connected at all.
    pub async fn last_connected_at(&self) -> Option<DateTime<Utc>> {
        self.inner.state.lock().await.connected_at
    }
}
