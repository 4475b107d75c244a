//! Amiibo Card Component
//!
//! One roster entry linking to its detail page.

use leptos::prelude::*;

use crate::lifecycle::CardModel;

#[component]
pub fn AmiiboCard(card: CardModel) -> impl IntoView {
    let CardModel { title, image, series_badge, href } = card;
    let alt = title.clone();

    view! {
        <a href=href class="amiibo-card slide-up">
            <div class="card-frame">
                <div class="card-accent"></div>

                // Portrait
                <div class="card-portrait">
                    {match image {
                        Some(src) => view! { <img class="card-image" src=src alt=alt /> }.into_any(),
                        None => view! { <div class="card-placeholder">"🎮"</div> }.into_any(),
                    }}
                </div>

                // Name and series badge
                <div class="card-info">
                    <h3 class="card-title">{title}</h3>
                    {series_badge.map(|name| view! {
                        <div class="series-badge">
                            <span>{name}</span>
                        </div>
                    })}
                </div>
            </div>
        </a>
    }
}
