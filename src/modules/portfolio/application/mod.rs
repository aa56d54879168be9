pub mod ports;
pub mod profile_content;
pub mod services;
pub mod use_cases;
