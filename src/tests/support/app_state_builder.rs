use crate::portfolio::application::use_cases::get_profile_document::GetProfileDocumentUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_profile_document: Option<Arc<dyn GetProfileDocumentUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_profile_document: Some(Arc::new(StubGetProfileDocumentUseCase::not_used())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_profile_document(
        mut self,
        uc: impl GetProfileDocumentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_profile_document = Some(Arc::new(uc));
        self
    }

    pub fn with_get_profile_document_arc(
        mut self,
        uc: Arc<dyn GetProfileDocumentUseCase + Send + Sync>,
    ) -> Self {
        self.get_profile_document = Some(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_profile_document_use_case: self
                .get_profile_document
                .expect("get_profile_document_use_case not set"),
        })
    }
}
