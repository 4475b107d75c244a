//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpAmiiboApi;
use crate::config::ApiConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Resolved once at startup
    api_config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(api_config: ApiConfig) -> Self {
        Self {
            api_config: StoredValue::new(api_config),
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        self.api_config.get_value()
    }

    /// Fresh client for a view; views share no cache
    pub fn api(&self) -> HttpAmiiboApi {
        HttpAmiiboApi::new(self.api_config())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
