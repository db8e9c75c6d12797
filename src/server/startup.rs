use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::ConnectOptions;

use crate::server::{config::Config, data::session::StoreSession, error::Error, model::app::AppState};

/// Connect to the score store and run migrations
///
/// A connection failure here is returned to the caller, which has nothing useful left to do
/// without storage.
pub async fn connect_to_store(config: &Config) -> Result<StoreSession, Error> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let session = StoreSession::new(options, config.probe_interval);
    let db = session.ensure_connection().await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Score store ready");

    Ok(session)
}

/// Build the shared application state
pub async fn build_state(config: &Config) -> Result<AppState, Error> {
    let session = connect_to_store(config).await?;

    Ok(AppState {
        session,
        images: Arc::new(config.images.clone()),
    })
}
