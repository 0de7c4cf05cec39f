//! Leptos DragDrop Utilities
//!
//! Mouse-driven reordering for flat Leptos lists.
//! Uses movement threshold to distinguish click from drag.
//!
//! Rows are addressed by a caller-chosen key; drop targets are slots between
//! rows, where slot `n` means "before the row currently at index `n`" and slot
//! `len` means "after the last row".

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Slot a dragged row would land in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub position: usize,
}

/// DnD state signals
pub struct DndSignals<K: 'static> {
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row key (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<K: 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for DndSignals<K> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<K>() -> DndSignals<K>
where
    K: Clone + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Final index of a row moved from `from` into `slot`, or `None` when the
/// move would leave the list unchanged or is out of range.
pub fn resolve_move(from: usize, slot: usize, len: usize) -> Option<usize> {
    if from >= len || slot > len {
        return None;
    }
    if slot == from || slot == from + 1 {
        return None;
    }
    Some(if slot > from { slot - 1 } else { slot })
}

/// End drag operation
pub fn end_drag<K>(dnd: &DndSignals<K>)
where
    K: Send + Sync + 'static,
{
    let _ = dnd.dragging_write.try_set(None);
    let _ = dnd.drop_target_write.try_set(None);
    let _ = dnd.pending_write.try_set(None);
    let _ = dnd.drag_just_ended_write.try_set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), 100);
    }
}

/// Record a pending drag for the row under the pointer.
/// Form controls inside the row keep their normal mouse behaviour.
pub fn begin_pending<K>(dnd: &DndSignals<K>, key: K, ev: &web_sys::MouseEvent)
where
    K: Send + Sync + 'static,
{
    if ev.button() != 0 {
        return;
    }
    if let Some(target) = ev.target() {
        if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
        if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
        if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
    }
    dnd.pending_write.set(Some(key));
    dnd.start_x_write.set(ev.client_x());
    dnd.start_y_write.set(ev.client_y());
}

/// Pointer entered the slot at `position`
pub fn enter_slot<K>(dnd: &DndSignals<K>, position: usize)
where
    K: Clone + Send + Sync + 'static,
{
    if dnd.dragging_read.get_untracked().is_some() {
        dnd.drop_target_write.set(Some(DropTarget { position }));
    }
}

/// Pointer left a slot
pub fn leave_slot<K>(dnd: &DndSignals<K>)
where
    K: Clone + Send + Sync + 'static,
{
    if dnd.dragging_read.get_untracked().is_some() {
        dnd.drop_target_write.set(None);
    }
}

/// Whether `key` is the row being dragged (tracked)
pub fn is_dragging<K>(dnd: &DndSignals<K>, key: &K) -> bool
where
    K: PartialEq + Send + Sync + 'static,
{
    dnd.dragging_read.with(|dragging| dragging.as_ref() == Some(key))
}

/// Whether the slot at `position` is the current drop target (tracked)
pub fn is_active_slot<K>(dnd: &DndSignals<K>, position: usize) -> bool
where
    K: Send + Sync + 'static,
{
    dnd.drop_target_read.get() == Some(DropTarget { position })
}

/// A binding made outside the reactive tree that must be undone by hand
pub trait Detach {
    fn detach(&self);
}

/// Undo `binding` when the current reactive owner is cleaned up
pub fn detach_on_cleanup<D>(binding: D)
where
    D: Detach + 'static,
{
    let slot = StoredValue::new_local(Some(binding));
    on_cleanup(move || {
        if let Some(Some(binding)) = slot.try_update_value(Option::take) {
            binding.detach();
        }
    });
}

/// Document mouse listeners for one list, removed on detach
struct DocumentListeners {
    on_mousemove: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>,
    on_mouseup: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl DocumentListeners {
    fn for_each(&self, mut f: impl FnMut(&web_sys::Document, &str, &js_sys::Function)) {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            f(&doc, "mousemove", self.on_mousemove.as_ref().unchecked_ref());
            f(&doc, "mouseup", self.on_mouseup.as_ref().unchecked_ref());
        }
    }

    fn attach(&self) {
        self.for_each(|doc, event, callback| {
            let _ = doc.add_event_listener_with_callback(event, callback);
        });
    }
}

impl Detach for DocumentListeners {
    fn detach(&self) {
        self.for_each(|doc, event, callback| {
            let _ = doc.remove_event_listener_with_callback(event, callback);
        });
    }
}

/// Bind document-level mousemove (drag start) and mouseup (drop) handlers.
///
/// The handlers are removed when the calling component's owner is cleaned up.
pub fn bind_global_listeners<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: Clone + Send + Sync + 'static,
    F: Fn(K, DropTarget) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.try_get_untracked().flatten() else { return };
        if dnd.dragging_read.try_get_untracked().flatten().is_some() {
            return;
        }
        let start_x = dnd.start_x_read.try_get_untracked().unwrap_or_default();
        let start_y = dnd.start_y_read.try_get_untracked().unwrap_or_default();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();

        // Start dragging if moved beyond threshold
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            let _ = dnd.dragging_write.try_set(Some(pending));
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.try_get_untracked().flatten();
        let target = dnd.drop_target_read.try_get_untracked().flatten();

        end_drag(&dnd);
        if let (Some(dragged), Some(target)) = (dragging, target) {
            on_drop(dragged, target);
        }
    });

    let listeners = DocumentListeners { on_mousemove, on_mouseup };
    listeners.attach();
    detach_on_cleanup(listeners);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<u32>>);

    impl Detach for Counted {
        fn detach(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_binding_detached_once_on_cleanup() {
        let detached = Rc::new(Cell::new(0));
        let owner = Owner::new();
        owner.with(|| detach_on_cleanup(Counted(Rc::clone(&detached))));
        assert_eq!(detached.get(), 0);

        owner.cleanup();
        assert_eq!(detached.get(), 1);

        owner.cleanup();
        assert_eq!(detached.get(), 1);
    }

    #[test]
    fn test_move_down_lands_before_slot() {
        // [a b c d], drag a into slot 3 (before d) -> [b c a d]
        assert_eq!(resolve_move(0, 3, 4), Some(2));
        // drag a to the end
        assert_eq!(resolve_move(0, 4, 4), Some(3));
    }

    #[test]
    fn test_move_up() {
        assert_eq!(resolve_move(3, 0, 4), Some(0));
        assert_eq!(resolve_move(2, 1, 4), Some(1));
    }

    #[test]
    fn test_adjacent_slots_are_noops() {
        assert_eq!(resolve_move(1, 1, 4), None);
        assert_eq!(resolve_move(1, 2, 4), None);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(resolve_move(4, 0, 4), None);
        assert_eq!(resolve_move(0, 5, 4), None);
        assert_eq!(resolve_move(0, 0, 0), None);
    }
}
