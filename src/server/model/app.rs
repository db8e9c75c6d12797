use std::sync::Arc;

use crate::server::{data::session::StoreSession, model::image::ScoredImage};

/// Shared handles for commands and scheduled jobs.
///
/// Cloning is cheap: the store session and the configured image list are both shared.
#[derive(Clone)]
pub struct AppState {
    pub session: StoreSession,
    pub images: Arc<Vec<ScoredImage>>,
}
