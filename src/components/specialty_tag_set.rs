//! Specialty Tag Set Component
//!
//! Toggle tags for the dietary/specialty flags. Holds no state; active
//! styling comes from the flags it is given.

use leptos::prelude::*;

use crate::form::{SpecialtyFlag, SpecialtyFlags};

#[component]
pub fn SpecialtyTagSet(
    #[prop(into)] flags: Signal<SpecialtyFlags>,
    /// Called with the flag and its new value
    #[prop(into)] on_change: Callback<(SpecialtyFlag, bool)>,
) -> impl IntoView {
    view! {
        <div class="specialty-tags" role="group" aria-label="Specialties">
            {SpecialtyFlag::ALL.into_iter().map(|flag| {
                let active = move || flags.with(|f| f.get(flag));
                let icon = flag.icon();
                view! {
                    <button
                        type="button"
                        class=move || if active() { "specialty-tag active" } else { "specialty-tag" }
                        aria-pressed=move || active().to_string()
                        data-flag=flag.key()
                        on:click=move |_| on_change.run((flag, !flags.with_untracked(|f| f.get(flag))))
                    >
                        <span class="icon" aria-hidden="true">{icon.glyph()}</span>
                        {flag.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
