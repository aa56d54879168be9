pub mod get_profile_document;
