pub mod get_profile_document_service;

pub use get_profile_document_service::GetProfileDocumentService;
