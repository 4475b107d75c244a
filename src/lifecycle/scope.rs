//! Fetch Scope
//!
//! Ties in-flight requests to a view's lifetime. A scope owns at most one
//! request; starting another aborts the previous one, and `cancel` (called
//! from `on_cleanup`) aborts whatever is left so a late response never
//! reaches a disposed view.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable};

#[derive(Clone, Default)]
pub struct FetchScope {
    current: Arc<Mutex<Option<AbortHandle>>>,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `fut` the scope's only request, aborting any previous one
    pub fn track<F: Future>(&self, fut: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.lock().replace(handle) {
            previous.abort();
        }
        Abortable::new(fut, registration)
    }

    /// Abort the tracked request, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Spawn `fut` on the UI thread as the scope's request
pub fn spawn_in<F>(scope: &FetchScope, tag: &'static str, fut: F)
where
    F: Future<Output = ()> + 'static,
{
    let task = scope.track(fut);
    leptos::task::spawn_local(async move {
        if task.await.is_err() {
            log::debug!("[{}] request cancelled", tag);
        }
    });
}
