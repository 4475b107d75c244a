use thiserror::Error;

pub const LIST_FAILED: &str = "Failed to fetch amiibos";
pub const GET_FAILED: &str = "Failed to fetch amiibo";
pub const DELETE_FAILED: &str = "Failed to delete amiibo";
pub const NOT_FOUND_MESSAGE: &str = "Fighter not found";

/// The remote call did not succeed.
///
/// Carries only a message. Status code and response body are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
