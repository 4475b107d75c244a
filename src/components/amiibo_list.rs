//! Amiibo List Component
//!
//! The roster: fetches every fighter on mount and renders one card each.

use leptos::prelude::*;

use crate::components::{AmiiboCard, ErrorPanel, LoadingPanel};
use crate::context::use_app_context;
use crate::lifecycle::{load_list, spawn_in, CardModel, FetchScope, ListDisplay, ListEvent, ListState};

#[component]
pub fn AmiiboList() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(ListState::default());
    let scope = FetchScope::new();

    // Load roster once per mount
    Effect::new({
        let scope = scope.clone();
        move |_| {
            log::info!("[LIST] Loading roster");
            set_state.update(|s| s.apply(ListEvent::Mounted));
            let api = ctx.api();
            spawn_in(&scope, "LIST", async move {
                let event = load_list(&api).await;
                match &event {
                    ListEvent::Fetched(records) => log::info!("[LIST] Loaded {} fighters", records.len()),
                    ListEvent::Failed(message) => log::warn!("[LIST] Load failed: {}", message),
                    ListEvent::Mounted => {}
                }
                let _ = set_state.try_update(|s| s.apply(event));
            });
        }
    });

    on_cleanup(move || scope.cancel());

    move || {
        state.with(|s| match s.display() {
            ListDisplay::Loading => view! { <LoadingPanel dots=true /> }.into_any(),
            ListDisplay::Error(message) => view! { <ErrorPanel message=message.to_string() /> }.into_any(),
            ListDisplay::Empty => roster_page(s.count_label(), Vec::new()),
            ListDisplay::Populated(records) => {
                roster_page(s.count_label(), records.iter().map(CardModel::from).collect())
            }
        })
    }
}

fn roster_page(count_label: Option<String>, cards: Vec<CardModel>) -> AnyView {
    let body = if cards.is_empty() {
        view! {
            <div class="roster-empty">
                <div class="roster-empty-icon">"📦"</div>
                <h2 class="roster-empty-title">"No Fighters"</h2>
                <p class="roster-empty-text">"Your roster is empty"</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="roster-grid">
                {cards.into_iter().map(|card| view! { <AmiiboCard card=card /> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="screen">
            <header class="roster-header">
                <div class="fire-line"></div>
                <div class="container header-row">
                    <div class="header-icon glow-pulse">"🎯"</div>
                    <div>
                        <h1 class="app-title">"AmiiBox"</h1>
                        <div class="header-subtitle">
                            <div class="fire-bar"></div>
                            <p class="roster-count">{count_label}</p>
                        </div>
                    </div>
                </div>
            </header>

            <main class="container roster-main">{body}</main>

            // Decorative corner accents
            <div class="corner-accent top-left"></div>
            <div class="corner-accent bottom-right"></div>
        </div>
    }
    .into_any()
}
