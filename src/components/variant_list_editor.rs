//! Variant List Editor Component
//!
//! Editable list of price variants with drag-to-reorder.
//! Uses leptos-dragdrop with explicit drop slots between rows.

use leptos::prelude::*;

use crate::components::SessionSignal;
use crate::form::VariantField;
use crate::icons::Icon;

use leptos_dragdrop::*;

fn variant_text(session: SessionSignal, id: &str, field: VariantField) -> String {
    session.with(|s| {
        s.draft()
            .variants
            .records()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.get(field).to_string())
            .unwrap_or_default()
    })
}

#[component]
pub fn VariantListEditor(session: SessionSignal) -> impl IntoView {
    let dnd = create_dnd_signals::<String>();

    bind_global_listeners(dnd, move |dragged_id: String, target| {
        let moved = session.try_update(|s| s.draft_mut().variants.move_to(&dragged_id, target.position));
        if moved == Some(true) {
            log::debug!("[VARIANTS] {} moved to slot {}", dragged_id, target.position);
        }
    });

    let ids = move || {
        session.with(|s| s.draft().variants.records().iter().map(|r| r.id.clone()).collect::<Vec<_>>())
    };
    let len = Signal::derive(move || session.with(|s| s.draft().variants.len()));
    let is_empty = move || len.get() == 0;

    let add_variant = move |_| {
        session.update(|s| {
            let id = s.draft_mut().variants.add();
            log::debug!("[VARIANTS] added {}", id);
        });
    };

    view! {
        <fieldset class="variant-list">
            <legend>"Price variants"</legend>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="variant-empty">"No variants. The item is sold at its base price."</p> }
            >
                <For
                    each=ids
                    key=|id| id.clone()
                    children=move |id| {
                        let id = StoredValue::new(id);
                        let index = Signal::derive(move || {
                            id.with_value(|id| session.with(|s| s.draft().variants.position(id))).unwrap_or(0)
                        });
                        let on_mousedown = move |ev: web_sys::MouseEvent| begin_pending(&dnd, id.get_value(), &ev);
                        let row_class = move || {
                            let mut c = String::from("variant-row");
                            if id.with_value(|id| is_dragging(&dnd, id)) { c.push_str(" dragging"); }
                            c
                        };

                        let field_input = move |field: VariantField, placeholder: &'static str, input_type: &'static str| {
                            view! {
                                <input
                                    type=input_type
                                    step="any"
                                    placeholder=placeholder
                                    required=field != VariantField::PromotionalPrice
                                    prop:value=move || id.with_value(|id| variant_text(session, id, field))
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        session.update(|s| {
                                            id.with_value(|id| s.draft_mut().variants.update(id, field, value));
                                        });
                                    }
                                />
                            }
                        };

                        view! {
                            <VariantDropSlot dnd=dnd position=index />
                            <div class=row_class on:mousedown=on_mousedown>
                                <span class="drag-handle" title=Icon::DragHandle.label()>{Icon::DragHandle.glyph()}</span>
                                {field_input(VariantField::Label, "Label (e.g. Large)", "text")}
                                {field_input(VariantField::Price, "Price", "number")}
                                {field_input(VariantField::PromotionalPrice, "Promo price", "number")}
                                <button
                                    type="button"
                                    class="variant-remove"
                                    on:click=move |_| {
                                        session.update(|s| {
                                            id.with_value(|id| s.draft_mut().variants.remove(id));
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
                <VariantDropSlot dnd=dnd position=len />
            </Show>

            <button type="button" class="variant-add" on:click=add_variant>"+ Add variant"</button>
        </fieldset>
    }
}

/// Horizontal separator a dragged row can be dropped on
#[component]
fn VariantDropSlot(dnd: DndSignals<String>, #[prop(into)] position: Signal<usize>) -> impl IntoView {
    let on_mouseenter = move |_| enter_slot(&dnd, position.get_untracked());
    let on_mouseleave = move |_| leave_slot(&dnd);

    let slot_class = move || {
        let mut c = String::from("drop-zone");
        if dnd.dragging_read.with(Option::is_none) { c.push_str(" hidden"); }
        if is_active_slot(&dnd, position.get()) { c.push_str(" active"); }
        c
    };

    view! { <div class=slot_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave /> }
}
