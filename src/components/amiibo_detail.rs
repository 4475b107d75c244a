//! Amiibo Detail Component
//!
//! One fighter, addressed by the `:id` route segment, with a confirmed
//! delete action.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::{DeleteConfirmButton, ErrorPanel, LoadingPanel};
use crate::context::use_app_context;
use crate::dom;
use crate::lifecycle::{
    delete_flow, load_detail, spawn_in, Confirmation, DeleteOutcome, DetailEvent, DetailState, FetchScope,
};
use crate::models::Amiibo;
use crate::routes::{IdParam, LIST_PATH};

#[component]
pub fn AmiiboDetail() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let navigate = use_navigate();

    let id_param = Memo::new(move |_| params.with(|p| IdParam::parse(p.get("id").as_deref())));
    let (state, set_state) = signal(DetailState::default());
    let (delete_requests, set_delete_requests) = signal(0u32);
    let fetch_scope = FetchScope::new();
    let delete_scope = FetchScope::new();

    // Load on mount and on every id change
    Effect::new({
        let fetch_scope = fetch_scope.clone();
        let delete_scope = delete_scope.clone();
        move |_| {
            let param = id_param.get();
            delete_scope.cancel();
            set_state.update(|s| s.apply(DetailEvent::Mounted));

            if param == IdParam::Missing {
                log::warn!("[DETAIL] No fighter id in path, nothing to load");
                fetch_scope.cancel();
                return;
            }

            log::info!("[DETAIL] Loading {:?}", param);
            let api = ctx.api();
            spawn_in(&fetch_scope, "DETAIL", async move {
                if let Some(event) = load_detail(&api, &param).await {
                    let _ = set_state.try_update(|s| s.apply(event));
                }
            });
        }
    });

    // Run each confirmed delete
    Effect::new({
        let delete_scope = delete_scope.clone();
        move |_| {
            if delete_requests.get() == 0 {
                return;
            }
            let Some(id) = state.with_untracked(DetailState::deletable_id) else {
                return;
            };
            set_state.update(|s| s.apply(DetailEvent::DeleteRequested));

            let api = ctx.api();
            let navigate = navigate.clone();
            spawn_in(&delete_scope, "DETAIL", async move {
                let outcome = delete_flow(&api, id, Confirmation::Accepted, |path| {
                    navigate(path, Default::default())
                })
                .await;
                if let DeleteOutcome::Failed(message) = outcome {
                    dom::alert(&message);
                    let _ = set_state.try_update(|s| s.apply(DetailEvent::DeleteFailed));
                }
            });
        }
    });

    on_cleanup(move || {
        fetch_scope.cancel();
        delete_scope.cancel();
    });

    let on_delete = Callback::new(move |_: ()| set_delete_requests.update(|n| *n += 1));

    move || {
        state.with(|s| match s {
            DetailState::Loading => view! { <LoadingPanel /> }.into_any(),
            DetailState::Error(message) => view! { <ErrorPanel message=message.clone() back_link=true /> }.into_any(),
            DetailState::Loaded { amiibo, deleting } => detail_page(amiibo, *deleting, on_delete),
        })
    }
}

fn detail_page(amiibo: &Amiibo, deleting: bool, on_delete: Callback<()>) -> AnyView {
    let name = amiibo.name.clone();
    let portrait = match amiibo.image_url() {
        Some(src) => view! {
            <div class="portrait-frame">
                <img class="detail-image" src=src.to_string() alt=name.clone() />
            </div>
        }
        .into_any(),
        None => view! { <div class="detail-placeholder">"🎮"</div> }.into_any(),
    };
    let series_badge = amiibo.series_name().map(|series| {
        let series = series.to_string();
        view! {
            <div class="series-badge large">
                <span>{series}</span>
            </div>
        }
    });
    let fighter_id = amiibo.fighter_id_label();
    let series_id = amiibo.series_id_label();

    view! {
        <div class="screen">
            <header class="detail-header">
                <div class="fire-line"></div>
                <div class="container">
                    <a href=LIST_PATH class="back-link">
                        <span class="back-arrow">"←"</span>
                        <span>"Back to Roster"</span>
                    </a>
                </div>
            </header>

            <main class="container detail-main">
                <div class="showcase slide-up">
                    // Portrait
                    <div class="showcase-portrait">
                        <div class="frame-corner tl"></div>
                        <div class="frame-corner tr"></div>
                        <div class="frame-corner bl"></div>
                        <div class="frame-corner br"></div>
                        {portrait}
                    </div>

                    // Info
                    <div class="showcase-info">
                        <div class="fighter-heading">
                            <h1 class="fighter-name">{name}</h1>
                            <div class="fire-bar wide"></div>
                            {series_badge}
                        </div>

                        <div class="stats">
                            <div class="stat flame">
                                <div class="stat-label">"Fighter ID"</div>
                                <div class="stat-value">{fighter_id}</div>
                            </div>
                            <div class="stat gold">
                                <div class="stat-label">"Series ID"</div>
                                <div class="stat-value">{series_id}</div>
                            </div>
                        </div>

                        <div class="actions">
                            <DeleteConfirmButton disabled=deleting on_confirm=on_delete />
                            <a href=LIST_PATH class="action-btn steel">
                                <span>"View All"</span>
                            </a>
                        </div>
                    </div>
                </div>

                <div class="info-banner">
                    <p>"Amiibo figures unlock special content and features in compatible Nintendo games"</p>
                </div>
            </main>

            // Decorative corner accents
            <div class="corner-accent top-left"></div>
            <div class="corner-accent bottom-right"></div>
        </div>
    }
    .into_any()
}
