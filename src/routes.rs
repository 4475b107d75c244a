//! Route Paths
//!
//! Paths the router dispatches on and parsing of the detail id segment.

/// Roster (list view)
pub const LIST_PATH: &str = "/";

/// Detail page path for one fighter
pub fn detail_path(id: i64) -> String {
    format!("/amiibo/{}", id)
}

/// The `{id}` segment of `/amiibo/{id}`, as the detail view sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParam {
    /// No segment bound: nothing is fetched
    Missing,
    /// Segment present but not a fighter id (e.g. `abc`)
    Invalid(String),
    Id(i64),
}

impl IdParam {
    /// Takes the segment as the router hands it over, already decoded once.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return IdParam::Missing;
        };
        let segment = raw.trim();
        if segment.is_empty() {
            return IdParam::Missing;
        }
        match segment.parse::<i64>() {
            Ok(id) => IdParam::Id(id),
            Err(_) => IdParam::Invalid(segment.to_string()),
        }
    }
}
