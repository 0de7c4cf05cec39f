//! Image Upload Field Component
//!
//! File picker plus drop area. The picked file is read into a data URL for
//! the preview; only the newest read may land in the draft.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::components::SessionSignal;
use crate::form::ImageReads;
use crate::icons::Icon;

/// Read a file's contents as a `data:` URL
async fn read_as_data_url(file: &web_sys::File) -> Result<String, JsValue> {
    let reader = web_sys::FileReader::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("could not read file"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader.read_as_data_url(file)?;
    let result = JsFuture::from(promise).await?;
    result.as_string().ok_or_else(|| JsValue::from_str("reader returned no text"))
}

#[component]
pub fn ImageUploadField(session: SessionSignal) -> impl IntoView {
    let reads = StoredValue::new(ImageReads::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (drag_over, set_drag_over) = signal(false);

    let accept_file = move |file: web_sys::File| {
        let Some(ticket) = reads.try_update_value(|r| r.begin(&file.type_())).flatten() else {
            log::debug!("[IMAGE] ignoring {} ({})", file.name(), file.type_());
            return;
        };
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => {
                    let applied = session
                        .try_update(|s| {
                            reads
                                .try_with_value(|r| r.complete(ticket, &mut s.draft_mut().image, file, data_url))
                                .unwrap_or(false)
                        })
                        .unwrap_or(false);
                    if !applied {
                        log::debug!("[IMAGE] discarded stale read");
                    }
                }
                Err(e) => log::warn!("[IMAGE] read failed: {:?}", e),
            }
        });
    };

    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            accept_file(file);
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let file = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0));
        if let Some(file) = file {
            accept_file(file);
        }
    };

    let remove_image = move |_| {
        reads.update_value(|r| r.cancel_pending());
        session.update(|s| s.draft_mut().image.clear());
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    let preview = move || session.with(|s| s.draft().image.preview_url.clone());
    let area_class = move || if drag_over.get() { "image-drop-area drag-over" } else { "image-drop-area" };

    view! {
        <div class="image-upload-field">
            <label>"Photo"</label>
            <div
                class=area_class
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=on_drop
            >
                {move || match preview() {
                    Some(url) => view! {
                        <div class="image-preview">
                            <img src=url alt="Item photo preview" />
                            <button type="button" class="image-remove" on:click=remove_image>"Remove"</button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <p class="image-placeholder">
                            <span class="icon">{Icon::Upload.glyph()}</span>
                            " Drop an image here or pick one"
                        </p>
                    }.into_any(),
                }}
                <input type="file" accept="image/*" node_ref=input_ref on:change=on_change />
            </div>
        </div>
    }
}
