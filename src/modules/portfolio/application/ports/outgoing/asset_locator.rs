// ============================================================================
// Error Types
// ============================================================================

/// Reasons an asset reference cannot be turned into a servable URL.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AssetLocatorError {
    #[error("Asset path cannot be empty")]
    EmptyPath,

    #[error("Asset path '{0}' is not a relative public path")]
    InvalidPath(String),

    #[error("Asset base URL '{0}' must be an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("Asset '{0}' does not exist in the public directory")]
    MissingAsset(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// Port for resolving a public asset path (e.g. `profile.jpg`) into the URL a
/// browser can fetch it from.
///
/// Resolution is synchronous and must not perform network I/O.
pub trait AssetLocator: Send + Sync {
    fn asset_url(&self, path: &str) -> Result<String, AssetLocatorError>;
}
