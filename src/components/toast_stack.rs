//! Toast Stack Component
//!
//! Renders the toasts held in the app store, newest at the bottom.

use leptos::prelude::*;

use crate::icons::Icon;
use crate::models::{Toast, ToastKind};
use crate::store::{store_dismiss_toast, store_toasts, use_app_store};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let Toast { id, kind, title, description } = toast;
                    let (class, icon) = match kind {
                        ToastKind::Success => ("toast success", Icon::Success),
                        ToastKind::Error => ("toast error", Icon::Error),
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast-icon" aria-label=icon.label()>{icon.glyph()}</span>
                            <div class="toast-body">
                                <strong>{title}</strong>
                                {(!description.is_empty()).then(|| view! { <p>{description}</p> })}
                            </div>
                            <button type="button" class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
