pub mod asset_locator;

pub use asset_locator::{AssetLocator, AssetLocatorError};
