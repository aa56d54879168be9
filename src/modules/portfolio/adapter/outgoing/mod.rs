pub mod public_asset_locator;

pub use public_asset_locator::{AssetConfig, PublicAssetLocator};
