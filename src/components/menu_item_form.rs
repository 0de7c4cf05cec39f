//! Menu Item Form Component
//!
//! Create/edit form for one menu item. The session lives in a local signal
//! (it may hold a `web_sys::File`) and is driven by `MenuItemFormController`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ImageUploadField, SessionSignal, SpecialtyTagSet, VariantListEditor};
use crate::context::use_app_context;
use crate::form::{DraftField, FormMode, FormPhase, FormSession, MenuItemFormController, Navigator, SpecialtyFlag};
use crate::routes::Route;

/// Only number inputs accept decimals
fn step_for(input_type: &str) -> Option<&'static str> {
    (input_type == "number").then_some("any")
}

/// Text input bound to one draft field
#[component]
fn DraftInput(
    session: SessionSignal,
    field: DraftField,
    #[prop(into)] label: String,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=input_type
                step=step_for(input_type)
                placeholder=placeholder
                required=required
                prop:value=move || session.with(|s| s.draft().text(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| s.draft_mut().set_text(field, value));
                }
            />
        </label>
    }
}

#[component]
pub fn MenuItemForm(#[prop(into)] username: String, mode: FormMode) -> impl IntoView {
    let ctx = use_app_context();
    let is_edit = mode.is_edit();
    let session: SessionSignal = RwSignal::new_local(FormSession::new(mode));
    let controller = MenuItemFormController::new(ctx.menu_store(), ctx.notifier(), ctx.navigator());

    {
        let username = username.clone();
        spawn_local(async move {
            controller.load(&session, &username).await;
        });
    }

    let phase = move || session.with(|s| s.phase());
    let is_loaded = move || phase() != FormPhase::Initializing;
    let submitting = move || phase() == FormPhase::Submitting;

    let categories = move || session.with(|s| s.shop().map(|shop| shop.categories.clone()).unwrap_or_default());
    let category = move || session.with(|s| s.draft().category.clone());
    let flags = Signal::derive(move || session.with(|s| s.draft().flags));
    let has_allergens = move || flags.with(|f| f.has_allergens);

    let on_flag_change = move |(flag, value): (SpecialtyFlag, bool)| {
        session.update(|s| s.draft_mut().flags.set(flag, value));
    };

    let on_category_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        controller.change_category(&session, &value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            controller.submit(&session).await;
        });
    };

    let back_route = Route::Menu { username };
    let on_cancel = move |_| ctx.navigator().navigate_to(&back_route);

    view! {
        <section class="menu-item-form">
            <h2>{if is_edit { "Edit menu item" } else { "New menu item" }}</h2>

            <Show when=is_loaded fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form on:submit=on_submit>
                    <DraftInput session=session field=DraftField::Title label="Title" required=true />
                    <label class="form-field">
                        <span>"Description"</span>
                        <textarea
                            required=true
                            prop:value=move || session.with(|s| s.draft().description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                session.update(|s| s.draft_mut().set_text(DraftField::Description, value));
                            }
                        />
                    </label>

                    <div class="form-row">
                        <DraftInput session=session field=DraftField::Price label="Price" input_type="number" required=true />
                        <DraftInput
                            session=session
                            field=DraftField::PromotionalPrice
                            label="Promotional price"
                            input_type="number"
                            placeholder="Leave empty for none"
                        />
                    </div>

                    <div class="form-row">
                        <DraftInput
                            session=session
                            field=DraftField::PreparationTime
                            label="Preparation time (min)"
                            placeholder="15-20"
                        />
                        <DraftInput session=session field=DraftField::ItemCode label="Item code" />
                    </div>

                    <label class="form-field">
                        <span>"Category"</span>
                        <select on:change=on_category_change>
                            <option value="">"Choose a category"</option>
                            <For
                                each=categories
                                key=|c| c.clone()
                                children=move |c| {
                                    let value = c.clone();
                                    let text = c.clone();
                                    let selected = move || category() == value;
                                    view! { <option value=c prop:selected=selected>{text}</option> }
                                }
                            />
                        </select>
                    </label>

                    <SpecialtyTagSet flags=flags on_change=on_flag_change />

                    <Show when=has_allergens>
                        <label class="form-field">
                            <span>"Allergy note"</span>
                            <textarea
                                placeholder="e.g. contains nuts and gluten"
                                prop:value=move || session.with(|s| s.draft().allergy_note.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    session.update(|s| s.draft_mut().set_text(DraftField::AllergyNote, value));
                                }
                            />
                        </label>
                    </Show>

                    <ImageUploadField session=session />

                    <VariantListEditor session=session />

                    <div class="form-actions">
                        <button type="button" class="secondary" on:click=on_cancel.clone()>"Cancel"</button>
                        <button type="submit" class="primary" disabled=submitting>
                            {move || match (submitting(), is_edit) {
                                (true, _) => "Saving...",
                                (false, true) => "Save changes",
                                (false, false) => "Create item",
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
