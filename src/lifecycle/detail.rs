//! Detail View State Machine
//!
//! Loading → Error | Loaded, plus the confirmed delete flow.

use crate::api::{AmiiboApi, NOT_FOUND_MESSAGE};
use crate::models::Amiibo;
use crate::routes::{IdParam, LIST_PATH};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Loading,
    Error(String),
    /// `deleting` is set while a delete request is in flight
    Loaded { amiibo: Amiibo, deleting: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    /// Mount or id change
    Mounted,
    Fetched(Amiibo),
    Failed(String),
    DeleteRequested,
    DeleteFailed,
}

impl DetailState {
    pub fn reduce(self, event: DetailEvent) -> Self {
        match (self, event) {
            (_, DetailEvent::Mounted) => DetailState::Loading,
            (DetailState::Loading, DetailEvent::Fetched(amiibo)) => DetailState::Loaded { amiibo, deleting: false },
            (DetailState::Loading, DetailEvent::Failed(message)) => {
                if message.trim().is_empty() {
                    DetailState::Error(NOT_FOUND_MESSAGE.to_string())
                } else {
                    DetailState::Error(message)
                }
            }
            (DetailState::Loaded { amiibo, deleting: false }, DetailEvent::DeleteRequested) => {
                DetailState::Loaded { amiibo, deleting: true }
            }
            (DetailState::Loaded { amiibo, .. }, DetailEvent::DeleteFailed) => {
                DetailState::Loaded { amiibo, deleting: false }
            }
            (state, _) => state,
        }
    }

    pub fn apply(&mut self, event: DetailEvent) {
        *self = std::mem::take(self).reduce(event);
    }

    /// Id of the displayed record when a delete may start
    pub fn deletable_id(&self) -> Option<i64> {
        match self {
            DetailState::Loaded { amiibo, deleting: false } => Some(amiibo.id),
            _ => None,
        }
    }
}

/// Fetch the record named by the path segment.
///
/// `None` means nothing was requested (no id bound) and the view stays in
/// `Loading`. A non-numeric id fails without touching the network.
pub async fn load_detail<A: AmiiboApi + ?Sized>(api: &A, param: &IdParam) -> Option<DetailEvent> {
    match param {
        IdParam::Missing => None,
        IdParam::Invalid(raw) => Some(DetailEvent::Failed(format!("Invalid fighter id: {}", raw))),
        IdParam::Id(id) => Some(match api.get_by_id(*id).await {
            Ok(amiibo) => DetailEvent::Fetched(amiibo),
            Err(e) => DetailEvent::Failed(e.message().to_string()),
        }),
    }
}

/// Answer to the yes/no gate in front of delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed(String),
}

/// Delete `id` once confirmed, then navigate back to the roster.
///
/// `navigate` runs exactly once on success and never on failure.
pub async fn delete_flow<A, N>(api: &A, id: i64, confirmation: Confirmation, navigate: N) -> DeleteOutcome
where
    A: AmiiboApi + ?Sized,
    N: FnOnce(&str),
{
    if confirmation == Confirmation::Declined {
        return DeleteOutcome::Declined;
    }
    match api.delete_by_id(id).await {
        Ok(()) => {
            log::info!("[DETAIL] Deleted fighter {}", id);
            navigate(LIST_PATH);
            DeleteOutcome::Deleted
        }
        Err(e) => {
            log::warn!("[DETAIL] Delete of fighter {} failed: {}", id, e);
            DeleteOutcome::Failed(e.message().to_string())
        }
    }
}
