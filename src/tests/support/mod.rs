pub mod app_state_builder;
pub mod env;
pub mod profile_fixtures;
pub mod stubs;
