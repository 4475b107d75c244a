//! AmiiBox Frontend App
//!
//! Router mapping the roster and detail paths to their views.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{AmiiboDetail, AmiiboList, NotFoundPanel};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(ApiConfig::load()));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPanel /> }>
                <Route path=path!("/") view=AmiiboList />
                <Route path=path!("/amiibo/:id") view=AmiiboDetail />
            </Routes>
        </Router>
    }
}
