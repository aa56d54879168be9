use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::AssetLocatorError;
use crate::portfolio::domain::entities::ProfileDocument;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProfileDocumentError {
    /// An image reference could not be resolved. This is a deployment
    /// configuration problem, the document is never returned partially.
    #[error("failed to resolve asset '{path}': {source}")]
    AssetResolution {
        path: String,
        #[source]
        source: AssetLocatorError,
    },

    #[error("invalid profile content: {0}")]
    InvalidContent(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProfileDocumentUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileDocument, GetProfileDocumentError>;
}
