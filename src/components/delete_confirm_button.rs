//! Delete Confirm Button Component
//!
//! Inline yes/no gate in front of a destructive action.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, asks for confirmation with
/// ✓/✗ buttons; only ✓ runs `on_confirm`.
///
/// # Arguments
/// * `disabled` - Render a busy, unclickable button instead
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(optional)] disabled: bool,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    if disabled {
        return view! {
            <button class="action-btn delete" disabled=true>
                <span>"Deleting..."</span>
            </button>
        }
        .into_any();
    }

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="action-btn delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                <span>"Delete"</span>
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this fighter?"</span>
                <button
                    class="confirm-btn"
                    title="Yes"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="No"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
    .into_any()
}
