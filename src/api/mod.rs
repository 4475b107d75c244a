//! Amiibo API Client
//!
//! Data access to the remote Amiibo service, organized as a trait plus the
//! HTTP implementation used in the browser.

mod error;
mod http;

use async_trait::async_trait;

use crate::models::Amiibo;

pub use error::{FetchError, NOT_FOUND_MESSAGE};
pub use http::HttpAmiiboApi;

/// The three calls the views make against the remote service.
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait AmiiboApi {
    /// `GET /amiibo/`, in backend order
    async fn list_all(&self) -> Result<Vec<Amiibo>, FetchError>;

    /// `GET /amiibo/{id}`; not-found is an ordinary failure
    async fn get_by_id(&self, id: i64) -> Result<Amiibo, FetchError>;

    /// `DELETE /amiibo/{id}`; response body is ignored
    async fn delete_by_id(&self, id: i64) -> Result<(), FetchError>;
}
