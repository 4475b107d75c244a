//! List View State Machine

use crate::api::AmiiboApi;
use crate::models::{roster_count_label, Amiibo};
use crate::routes::detail_path;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<Amiibo>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    Mounted,
    Fetched(Vec<Amiibo>),
    Failed(String),
}

/// What the list view renders for a state
#[derive(Debug, PartialEq)]
pub enum ListDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(&'a [Amiibo]),
}

impl ListState {
    /// Resolutions only land while loading; anything later is stale.
    pub fn reduce(self, event: ListEvent) -> Self {
        match (self, event) {
            (_, ListEvent::Mounted) => ListState::Loading,
            (ListState::Loading, ListEvent::Fetched(records)) => ListState::Loaded(records),
            (ListState::Loading, ListEvent::Failed(message)) => ListState::Error(message),
            (state, _) => state,
        }
    }

    pub fn apply(&mut self, event: ListEvent) {
        *self = std::mem::take(self).reduce(event);
    }

    pub fn display(&self) -> ListDisplay<'_> {
        match self {
            ListState::Loading => ListDisplay::Loading,
            ListState::Error(message) => ListDisplay::Error(message),
            ListState::Loaded(records) if records.is_empty() => ListDisplay::Empty,
            ListState::Loaded(records) => ListDisplay::Populated(records),
        }
    }

    /// Header label; only meaningful once loaded
    pub fn count_label(&self) -> Option<String> {
        match self {
            ListState::Loaded(records) => Some(roster_count_label(records.len())),
            _ => None,
        }
    }
}

/// One roster card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub title: String,
    pub image: Option<String>,
    pub series_badge: Option<String>,
    pub href: String,
}

impl From<&Amiibo> for CardModel {
    fn from(amiibo: &Amiibo) -> Self {
        Self {
            title: amiibo.name.clone(),
            image: amiibo.image_url().map(str::to_string),
            series_badge: amiibo.series_name().map(str::to_string),
            href: detail_path(amiibo.id),
        }
    }
}

/// Fetch the roster once and report the outcome as an event
pub async fn load_list<A: AmiiboApi + ?Sized>(api: &A) -> ListEvent {
    match api.list_all().await {
        Ok(records) => ListEvent::Fetched(records),
        Err(e) => ListEvent::Failed(e.message().to_string()),
    }
}
