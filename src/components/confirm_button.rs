//! Confirm Button Component
//!
//! Inline confirmation button with confirm/cancel actions.

use leptos::prelude::*;

/// Inline confirmation button
///
/// Shows `label` initially. When clicked, shows `question` with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button (e.g., "reject-btn")
/// * `on_confirm` - Callback to execute when user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] question: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="inline-confirm">
                <span class="inline-confirm-text">{question.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
