use sea_orm::DbErr;
use thiserror::Error;

/// Failure talking to the score store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached or the handshake failed.
    ///
    /// The session has already discarded the broken handle when this is returned, so the
    /// operation may be retried and will reconnect.
    #[error("Failed to connect to the score store: {0}")]
    Connection(#[source] DbErr),
    /// A query, insert, delete or transaction failed.
    #[error(transparent)]
    Query(#[from] DbErr),
    /// A stored document could not be encoded or decoded.
    #[error("Malformed {collection} document: {source}")]
    Document {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn document(collection: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Document { collection, source }
    }

    /// Whether the failure was establishing a connection rather than running an operation.
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}
