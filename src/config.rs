//! API Configuration
//!
//! Base URL of the remote Amiibo service, resolved once at startup and
//! injected into the data client.

/// Used when neither the host page nor the build environment sets a URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// `<meta name="...">` read from the host page for a runtime override
pub const API_URL_META: &str = "amiibox-api-url";

/// Build-time override, captured by `option_env!`
const BUILD_API_URL: Option<&str> = option_env!("AMIIBOX_API_URL");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Pick the first non-blank of: runtime value, build-time value, default
    pub fn resolve(runtime: Option<String>, build_time: Option<&str>) -> Self {
        runtime
            .as_deref()
            .into_iter()
            .chain(build_time)
            .find(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Resolve against the host page and the build environment
    pub fn load() -> Self {
        let config = Self::resolve(crate::dom::meta_content(API_URL_META), BUILD_API_URL);
        log::info!("[CONFIG] API base URL: {}", config.base_url);
        config
    }

    /// Join an absolute API path (`/amiibo/...`) onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
