use async_trait::async_trait;
use tracing::debug;

use crate::portfolio::application::ports::outgoing::AssetLocator;
use crate::portfolio::application::profile_content::profile_document;
use crate::portfolio::application::use_cases::get_profile_document::{
    GetProfileDocumentError, GetProfileDocumentUseCase,
};
use crate::portfolio::domain::entities::ProfileDocument;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetProfileDocumentService<A>
where
    A: AssetLocator,
{
    assets: A,
}

impl<A> GetProfileDocumentService<A>
where
    A: AssetLocator,
{
    pub fn new(assets: A) -> Self {
        Self { assets }
    }
}

#[async_trait]
impl<A> GetProfileDocumentUseCase for GetProfileDocumentService<A>
where
    A: AssetLocator,
{
    async fn execute(&self) -> Result<ProfileDocument, GetProfileDocumentError> {
        let document = profile_document(&self.assets)?;

        debug!(
            skills = document.tech_stack.len(),
            projects = document.projects.len(),
            "profile document assembled"
        );

        Ok(document)
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::ports::outgoing::AssetLocatorError;
    use crate::portfolio::application::profile_content::{HRVST_IMAGE, PROFILE_IMAGE};
    use mockall::{mock, predicate::*};

    mock! {
        pub Assets {}
        impl AssetLocator for Assets {
            fn asset_url(&self, path: &str) -> Result<String, AssetLocatorError>;
        }
    }

    fn resolving_assets() -> MockAssets {
        let mut assets = MockAssets::new();
        assets
            .expect_asset_url()
            .returning(|path| Ok(format!("http://localhost:8000/{path}")));
        assets
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn execute_returns_full_document() {
        let service = GetProfileDocumentService::new(resolving_assets());

        let doc = service.execute().await.unwrap();

        assert_eq!(doc.personal_info.name, "Jerdon M. Litaoen");
        assert_eq!(doc.projects[0].name, "Hrvst");
        assert_eq!(doc.socials.len(), 4);
        assert_eq!(doc.contact.email(), "jdlitaoen@gmail.com");
    }

    #[tokio::test]
    async fn execute_resolves_each_image_once() {
        let mut assets = MockAssets::new();
        assets
            .expect_asset_url()
            .with(eq(PROFILE_IMAGE))
            .times(1)
            .returning(|path| Ok(format!("/{path}")));
        assets
            .expect_asset_url()
            .with(eq(HRVST_IMAGE))
            .times(1)
            .returning(|path| Ok(format!("/{path}")));

        let service = GetProfileDocumentService::new(assets);
        let doc = service.execute().await.unwrap();

        assert_eq!(doc.personal_info.image, "/profile.jpg");
        assert_eq!(doc.projects[0].image, "/hrvst-ss.png");
    }

    #[tokio::test]
    async fn execute_is_idempotent() {
        let service = GetProfileDocumentService::new(resolving_assets());

        let first = serde_json::to_string(&service.execute().await.unwrap()).unwrap();
        let second = serde_json::to_string(&service.execute().await.unwrap()).unwrap();

        assert_eq!(first, second);
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn execute_surfaces_asset_failure_as_configuration_error() {
        let mut assets = MockAssets::new();
        assets
            .expect_asset_url()
            .returning(|_| Err(AssetLocatorError::InvalidBaseUrl("ftp://nope".to_string())));

        let service = GetProfileDocumentService::new(assets);
        let result = service.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            GetProfileDocumentError::AssetResolution {
                path,
                source: AssetLocatorError::InvalidBaseUrl(_),
            } if path == PROFILE_IMAGE
        ));
    }
}
