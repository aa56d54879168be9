use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::portfolio::application::ports::outgoing::{AssetLocator, AssetLocatorError};

static BASE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/?#]+(/[^\s?#]*)?$").expect("static base URL pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub base_url: String,
    pub public_dir: Option<PathBuf>,
}

impl AssetConfig {
    /// Load asset configuration from environment variables.
    ///
    /// Base URL precedence: `ASSET_URL`, then `APP_URL`, then the address the
    /// server binds to. `PUBLIC_DIR` enables on-disk existence checks.
    pub fn from_env(host: &str, port: &str) -> Self {
        let base_url = Self::non_blank("ASSET_URL")
            .or_else(|| Self::non_blank("APP_URL"))
            .unwrap_or_else(|| {
                if Self::is_unspecified_host(host) {
                    warn!(
                        "ASSET_URL and APP_URL are unset and HOST={} is not routable; \
                         asset URLs will point at http://{}:{}",
                        host, host, port
                    );
                }
                format!("http://{host}:{port}")
            });

        let public_dir = Self::non_blank("PUBLIC_DIR").map(PathBuf::from);

        Self {
            base_url,
            public_dir,
        }
    }

    fn non_blank(key: &str) -> Option<String> {
        env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// `0.0.0.0` / `::` bind every interface but no browser can fetch from them.
    pub fn is_unspecified_host(host: &str) -> bool {
        host.trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .map(|ip| ip.is_unspecified())
            .unwrap_or(false)
    }
}

/// Resolves public asset paths against a base URL, the way a web framework's
/// `asset()` helper does.
#[derive(Debug, Clone)]
pub struct PublicAssetLocator {
    base_url: String,
    public_dir: Option<PathBuf>,
}

impl PublicAssetLocator {
    pub fn try_new(config: AssetConfig) -> Result<Self, AssetLocatorError> {
        let trimmed = config.base_url.trim().trim_end_matches('/');

        if !BASE_URL_PATTERN.is_match(trimmed) {
            return Err(AssetLocatorError::InvalidBaseUrl(config.base_url));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            public_dir: config.public_dir,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn normalize(path: &str) -> Result<&str, AssetLocatorError> {
        let relative = path.trim().trim_start_matches('/');

        if relative.is_empty() {
            return Err(AssetLocatorError::EmptyPath);
        }

        // Browsers collapse `.`/`..` segments, percent-encoded or not.
        let dot_segment = relative.split('/').any(|segment| {
            let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
            decoded == "." || decoded == ".."
        });
        if dot_segment || relative.contains("://") || relative.contains('\\') {
            return Err(AssetLocatorError::InvalidPath(path.to_string()));
        }

        Ok(relative)
    }
}

impl AssetLocator for PublicAssetLocator {
    fn asset_url(&self, path: &str) -> Result<String, AssetLocatorError> {
        let relative = Self::normalize(path)?;

        if let Some(dir) = &self.public_dir {
            if !dir.join(relative).is_file() {
                return Err(AssetLocatorError::MissingAsset(relative.to_string()));
            }
        }

        Ok(format!("{}/{}", self.base_url, relative))
    }
}
