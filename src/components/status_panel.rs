//! Status Panels
//!
//! Full-screen loading and error states shared by both views.

use leptos::prelude::*;

use crate::routes::LIST_PATH;

#[component]
pub fn LoadingPanel(
    /// Show the bouncing dots under the label
    #[prop(optional)]
    dots: bool,
) -> impl IntoView {
    view! {
        <div class="screen screen-centered">
            <div class="status-panel">
                <div class="status-icon glow-pulse">"🎮"</div>
                <div class="status-title loading-label">"Loading"</div>
                {dots.then(|| view! {
                    <div class="loading-dots">
                        <div class="dot flame"></div>
                        <div class="dot ember"></div>
                        <div class="dot gold"></div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    /// Offer a link back to the roster
    #[prop(optional)]
    back_link: bool,
) -> impl IntoView {
    view! {
        <div class="screen screen-centered">
            <div class="error-panel">
                <div class="status-icon flicker">"⚠️"</div>
                <h2 class="status-title">"Error"</h2>
                <p class="error-message">{message}</p>
                {back_link.then(|| view! {
                    <a href=LIST_PATH class="steel-btn">"Back to Roster"</a>
                })}
            </div>
        </div>
    }
}

/// Fallback for paths the router does not know
#[component]
pub fn NotFoundPanel() -> impl IntoView {
    view! { <ErrorPanel message="Page not found" back_link=true /> }
}
