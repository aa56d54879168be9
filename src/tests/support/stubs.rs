use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::AssetLocatorError;
use crate::portfolio::application::use_cases::get_profile_document::{
    GetProfileDocumentError, GetProfileDocumentUseCase,
};
use crate::portfolio::domain::entities::ProfileDocument;

#[derive(Clone)]
pub struct StubGetProfileDocumentUseCase {
    result: Result<ProfileDocument, GetProfileDocumentError>,
}

impl StubGetProfileDocumentUseCase {
    pub fn success(document: ProfileDocument) -> Self {
        Self {
            result: Ok(document),
        }
    }

    pub fn failing(err: GetProfileDocumentError) -> Self {
        Self { result: Err(err) }
    }

    pub fn asset_error(path: &str, source: AssetLocatorError) -> Self {
        Self::failing(GetProfileDocumentError::AssetResolution {
            path: path.to_string(),
            source,
        })
    }

    pub fn not_used() -> Self {
        Self::failing(GetProfileDocumentError::InvalidContent(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl GetProfileDocumentUseCase for StubGetProfileDocumentUseCase {
    async fn execute(&self) -> Result<ProfileDocument, GetProfileDocumentError> {
        self.result.clone()
    }
}
